//! Rule-based field extractors, one module per detailed document type.

pub mod daftar_sp2d;
pub mod patterns;
pub mod sp2d;
pub mod spm_spp;

pub use daftar_sp2d::extract_daftar_sp2d;
pub use sp2d::extract_sp2d;
pub use spm_spp::{extract_spm, extract_spp};
