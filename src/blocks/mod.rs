//! One module per named ACE data block, each a plain function over
//! `Xss`/`Header`: an in-memory ASCII decode has the whole XSS array
//! available up front, so there is no separate "locate this block's
//! byte range" phase to abstract over.

pub mod and;
pub mod esz;
pub mod land;
pub mod ldlw;
pub mod lqr;
pub mod lsig;
pub mod mtr;
pub mod nu;
pub mod sig;
pub mod tyr;
