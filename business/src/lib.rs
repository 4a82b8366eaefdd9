pub mod application {
    pub mod locks;
    pub mod product {
        pub mod manager;
        pub mod state;
    }
    pub mod session {
        pub mod manager;
        pub mod state;
    }
    pub mod user {
        pub mod directory;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod validation;
    pub mod auth {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod navigator;
        pub mod token_store;
    }
    pub mod product {
        pub mod errors;
        pub mod gateway;
        pub mod metrics;
        pub mod model;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod gateway;
        pub mod model;
    }
}
