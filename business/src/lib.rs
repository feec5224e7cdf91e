pub mod application {
    pub mod auth {
        pub mod login;
        pub mod register;
    }
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_items;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod review {
        pub mod create;
        pub mod get_by_product;
    }
    pub mod user {
        pub mod get_all;
        pub mod get_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod login;
            pub mod register;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_items;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_by_product;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_profile;
        }
    }
}
