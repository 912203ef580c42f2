pub mod application {
    pub mod cart {
        pub mod policy;
        pub mod store;
        mod writer;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod observer;
        pub mod repository;
        pub mod service;
    }
}
