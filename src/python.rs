use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::{DataSource, EngineConfig};
use crate::core::{
    AccommodationCriteria, FilterCriteria, ItemCriteria, ListingSummary, RankedResult,
    TransportCriteria,
};
use crate::engine::FilterEngine as RustFilterEngine;
use crate::error::FilterEngineError;

fn to_py_err(e: FilterEngineError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string())
}

/// Python wrapper for FilterEngine.
///
/// The search methods return the same dictionaries agent tools expect:
/// `listingId`, `title`, `location`, `basePrice`, `reason` on a match, or
/// `error` plus `suggestions` otherwise.
#[pyclass]
struct FilterEngine {
    engine: Arc<RustFilterEngine>,
    runtime: Arc<Runtime>,
}

impl FilterEngine {
    fn run(&self, criteria: FilterCriteria) -> PyResult<PyObject> {
        let engine = self.engine.clone();
        let response = self.runtime.block_on(async move {
            engine.search(&criteria).await.map_err(to_py_err)
        })?;

        Python::with_gil(|py| ranked_result_to_py(py, &response.result))
    }
}

#[pymethods]
impl FilterEngine {
    /// Create new FilterEngine over a JSON/SQLite dataset, or the mock data
    #[new]
    #[pyo3(signature = (data_path=None))]
    fn new(data_path: Option<String>) -> PyResult<Self> {
        let runtime = Arc::new(
            Runtime::new()
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?,
        );

        let config = EngineConfig {
            data: data_path
                .as_deref()
                .map(DataSource::from_path)
                .unwrap_or_default(),
            ..Default::default()
        };

        let engine = runtime
            .block_on(RustFilterEngine::from_config(&config))
            .map_err(to_py_err)?;

        Ok(Self {
            engine: Arc::new(engine),
            runtime,
        })
    }

    /// Best transport listing for the given filters
    #[pyo3(signature = (location=None, max_price=None, vehicle_type=None, make=None, model=None, year=None))]
    fn search_transport_listings(
        &self,
        location: Option<String>,
        max_price: Option<f64>,
        vehicle_type: Option<String>,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
    ) -> PyResult<PyObject> {
        self.run(FilterCriteria::Transport(TransportCriteria {
            location,
            max_price,
            vehicle_type,
            make,
            model,
            year,
        }))
    }

    /// Best accommodation listing for the given filters
    #[pyo3(signature = (location=None, max_price=None, property_type=None, num_guests=None))]
    fn search_accommodation_listings(
        &self,
        location: Option<String>,
        max_price: Option<f64>,
        property_type: Option<String>,
        num_guests: Option<i64>,
    ) -> PyResult<PyObject> {
        self.run(FilterCriteria::Accommodation(AccommodationCriteria {
            location,
            max_price,
            property_type,
            num_guests,
        }))
    }

    /// Best item listing for the given filters
    #[pyo3(signature = (location=None, max_price=None, item_category=None))]
    fn search_item_listings(
        &self,
        location: Option<String>,
        max_price: Option<f64>,
        item_category: Option<String>,
    ) -> PyResult<PyObject> {
        self.run(FilterCriteria::Item(ItemCriteria {
            location,
            max_price,
            item_category,
        }))
    }
}

/// Convert ListingSummary to Python dict
fn summary_to_py(py: Python, summary: &ListingSummary) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("listingId", &summary.listing_id)?;
    dict.set_item("title", &summary.title)?;
    dict.set_item("location", &summary.location)?;
    dict.set_item("basePrice", summary.base_price)?;
    dict.set_item("reason", summary.reason.as_str())?;
    Ok(dict.into())
}

/// Convert RankedResult to Python dict
fn ranked_result_to_py(py: Python, result: &RankedResult) -> PyResult<PyObject> {
    match result {
        RankedResult::Match(summary) => summary_to_py(py, summary),
        RankedResult::NoMatch { error, suggestions } => {
            let dict = PyDict::new(py);
            dict.set_item("error", error)?;

            let suggestions: PyResult<Vec<PyObject>> = suggestions
                .iter()
                .map(|s| summary_to_py(py, s))
                .collect();
            dict.set_item("suggestions", suggestions?)?;

            Ok(dict.into())
        }
    }
}

/// Python module
#[pymodule]
fn smart_filter_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<FilterEngine>()?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
