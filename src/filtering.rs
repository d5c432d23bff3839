use crate::data::schema::SensorColumn;
use polars::prelude::{col, lit, LazyFrame};

pub trait SensorFrameFilterExt {
    /// Keeps only rows reported by the personal weather station `id`.
    ///
    /// Station ids are stored as floats, so the comparison is float equality
    /// against the `id_pws` column; `1` and `1.0` select the same rows.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied.
    fn filter_station(self, id: f64) -> LazyFrame;
}

impl SensorFrameFilterExt for LazyFrame {
    fn filter_station(self, id: f64) -> LazyFrame {
        self.filter(col(SensorColumn::IdPws.name()).eq(lit(id)))
    }
}
