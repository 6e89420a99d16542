//! Capmosaic turns a raster image into a stylized mosaic: the source is
//! downsampled to a coarse grid and every grid cell becomes one uniformly
//! colored circular cap on a transparent canvas (or one solid block in the
//! pixelated alternate mode).
#![forbid(unsafe_code)]

pub mod composite;
pub mod error;
pub mod io;
pub mod mask;
pub mod pipeline;
pub mod plan;
pub mod raster;
pub mod resample;

pub use composite::{composite_caps, over};
pub use error::{CapmosaicError, CapmosaicResult};
pub use mask::{CircularMask, DEFAULT_CAP_RADIUS};
pub use pipeline::{OutputMode, RenderConfig, render, run};
pub use plan::{Resolution, plan_resolution};
pub use raster::{PixelGrid, Rgba8};
pub use resample::resample;
