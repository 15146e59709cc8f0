pub mod shared {
    pub mod core {
        pub mod config;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod absence_store;
        pub mod personnel_records;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod absence;
            pub mod rejection;
            pub mod schedule;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod record_absence {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_absence {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_absences {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod import_absences {
                pub mod handler;
                pub mod outcome;
                pub mod source;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod schedule_table;
            }
        }
    }

    pub mod personnel {
        pub mod core {
            pub mod classify;
            pub mod employee;
            pub mod event;
        }
        pub mod use_cases {
            pub mod change_employee {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod hire_employee {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_journal {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
