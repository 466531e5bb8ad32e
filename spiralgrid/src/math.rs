//! Float helpers usable from both `std` and `no_std` builds.
//!
//! `no_std` builds must enable the `libm` feature.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("spiralgrid requires either the `std` or the `libm` feature");

#[cfg(feature = "std")]
pub(crate) fn sqrt(v: f32) -> f32 {
    v.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn sqrt(v: f32) -> f32 {
    libm::sqrtf(v)
}

#[cfg(feature = "std")]
pub(crate) fn ceil(v: f32) -> f32 {
    v.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn ceil(v: f32) -> f32 {
    libm::ceilf(v)
}

#[cfg(feature = "std")]
pub(crate) fn round(v: f32) -> f32 {
    v.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn round(v: f32) -> f32 {
    libm::roundf(v)
}
