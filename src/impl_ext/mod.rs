// Crate-internal.
// ---

pub(crate) mod debt_network {
    pub(crate) mod svg_renderer;
}

pub(crate) mod settlement {
    pub(crate) mod simplifier;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext`.

    pub mod debt_network {
        pub use crate::impl_ext::debt_network::svg_renderer::*;
    }

    pub mod settlement {
        pub use crate::impl_ext::settlement::simplifier::*;
    }
}
