pub mod smooth_scroll;

pub use smooth_scroll::install_anchor_scrolling;
