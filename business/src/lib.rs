pub mod application {
    pub mod basket {
        pub mod apply_operation;
        pub mod get;
        pub mod persistent_store;
        pub mod reconcile;
    }
    pub mod order {
        pub mod render_invoice;
    }
    pub mod shipping {
        pub mod branch_choices;
        pub mod city_choices;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod session;
        pub mod store;
        pub mod use_cases {
            pub mod apply_operation;
            pub mod get;
            pub mod reconcile;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod invoice;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod render_invoice;
        }
    }
    pub mod product {
        pub mod model;
        pub mod repository;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shipping {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod branch_choices;
            pub mod city_choices;
        }
    }
}
