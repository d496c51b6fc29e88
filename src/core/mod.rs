// Domain-layer modules: the assessment pipeline and its stages
pub mod assessment {
    pub use crate::assessment::*;
}

pub mod questionnaire {
    pub use crate::questionnaire::*;
}

pub mod risk_profile {
    pub use crate::risk_profile::*;
}

pub mod allocation {
    pub use crate::allocation::*;
}

pub mod normalizer {
    pub use crate::normalizer::*;
}

pub mod recommendation {
    pub use crate::recommendation::*;
}

pub mod errors {
    pub use crate::errors::*;
}
