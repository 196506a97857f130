// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod shared {
    pub mod infrastructure {
        pub mod lazy;
    }
}

pub mod modules {
    pub mod attendees {
        pub mod core {
            pub mod record;
        }
        pub mod use_cases {
            pub mod confirm_presence {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod validate;
            }
            pub mod list_attendees {
                pub mod inbound {
                    pub mod http;
                }
                pub mod view;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod store;
                pub mod store_in_memory;
                pub mod store_lazy;
            }
        }
    }
}

pub mod shell;
