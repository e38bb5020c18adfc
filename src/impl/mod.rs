// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod obligations_csv_datasource;
        pub(crate) mod settlement_http_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod obligation_amount_model;
        pub(crate) mod settlement_request_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod obligations_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod debt_graph;
        pub(crate) mod imported_file;
        pub(crate) mod obligation;
        pub(crate) mod participant;
        pub(crate) mod split;
    }
    pub(crate) mod logic {
        pub(crate) mod commit_processor;
        pub(crate) mod debt_graph_aggregator;
        pub(crate) mod session;
        pub(crate) mod split_builder;
    }
    pub(crate) mod repositories {
        pub(crate) mod obligations_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod export_usecase;
        pub(crate) mod import_usecase;
        pub(crate) mod submit_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod obligation_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::debt_graph::*;
        pub use crate::domain::entities::imported_file::*;
        pub use crate::domain::entities::obligation::*;
        pub use crate::domain::entities::participant::*;
        pub use crate::domain::entities::split::*;
        pub use crate::domain::logic::session::Session;
    }
}
