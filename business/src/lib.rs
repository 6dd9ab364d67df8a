pub mod application {
    pub mod backend {
        pub mod initialize;
    }
}

pub mod domain {
    pub mod logger;
    pub mod backend {
        pub mod config;
        pub mod errors;
        pub mod sdk;
        pub mod state;
        pub mod use_cases {
            pub mod initialize;
        }
    }
}
