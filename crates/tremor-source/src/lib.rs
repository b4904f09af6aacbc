//! Seismic source injection for a staggered-grid elastic simulation.
//!
//! Once per time step the driver hands the local sources, the recorded
//! wavelet table, and the stress field to a [`SourceInjector`], which adds
//! each source's scaled amplitude to the stress components its mechanism
//! acts on.
//!
//! # Mechanisms
//!
//! | Code | [`InjectionMechanism`] | Component(s) | Cell-width product |
//! |------|------------------------|--------------|--------------------|
//! | 1  | `Explosion`      | xx, yy, zz (subtracted) | `dx·dy·dz`    |
//! | 8  | `DoubleCoupleXy` | xy | `dxp·dyp·dz` |
//! | 9  | `DoubleCoupleYz` | yz | `dx·dyp·dzp` |
//! | 10 | `DoubleCoupleXz` | xz | `dxp·dy·dzp` |
//!
//! `d*` are normal cell widths and `d*p` staggered ones. Any other code is
//! skipped without touching the field.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod injector;
pub mod mechanism;

pub use injector::SourceInjector;
pub use mechanism::InjectionMechanism;
