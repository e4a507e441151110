pub mod labeled;
pub mod packager;
pub mod serialization;
pub mod units;

pub use labeled::{Attributes, BandAxis, LabeledResult, LineAxis, ProxyAxis, RowAxis};
pub use packager::{ResultPackager, band_axis_from_table, fuv_band_axis, line_axis_from_table};
pub use serialization::{format_fixed_f64, format_scientific_f64, render_table};
pub use units::{lac_to_lat, lat_to_lac};
