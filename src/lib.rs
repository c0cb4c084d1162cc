pub mod configuration;

pub mod logistic {
    pub mod mapparameters;
    pub mod trajectory;
    pub mod sensitivity;
    pub mod histogram;
    pub mod entropy;
    pub mod analysis;
}

pub mod math {
    pub mod function;
    pub mod safeeval;

    pub mod expression {
        pub mod lexer;
        pub mod parser;
        pub mod expression;
    }
}

pub mod quadrature {
    pub mod quadratureparameters;
    pub mod riemann;
    pub mod sampleseries;
    pub mod analysis;
}
