// In: src/ffi/python.rs

use log::LevelFilter;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::fs::OpenOptions;
use std::num::NonZeroUsize;
use std::sync::Once;

use crate::bridge::compressor::Compressor;
use crate::bridge::stats::CompressionStats;
use crate::config::CompressorConfig;
use crate::error::SwingDoorError;
use crate::ffi::ioadapters::PyPointStream;
use crate::stream_pipeline::StreamCompressor;
use crate::types::Point;

/// Assembles a config from the FFI keyword options.
fn build_config(deviation: f64, max_interval: Option<usize>) -> PyResult<CompressorConfig> {
    let max_interval = match max_interval {
        Some(0) => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "max_interval must be a positive integer",
            ))
        }
        Some(count) => NonZeroUsize::new(count),
        None => None,
    };
    Ok(CompressorConfig {
        deviation,
        max_interval,
    })
}

//==================================================================================
// I. Stateful Streaming API (The recommended approach)
//==================================================================================

/// The Python-facing lazy compressor: iterate it to receive anchors one at
/// a time, pulled from the wrapped source on demand.
#[pyclass(name = "StreamCompressor", module = "swingdoor_core")]
pub struct PyStreamCompressor {
    inner: StreamCompressor<f64, PyPointStream>,
}

#[pymethods]
impl PyStreamCompressor {
    /// Creates a new StreamCompressor instance over a Python iterable of
    /// `(x, y)` pairs.
    ///
    /// This constructor is the main entry point from Python. It takes the
    /// tuning options as keyword arguments, or a complete JSON configuration
    /// document via `config_json`, which takes precedence over the keyword
    /// options when both are given.
    #[new]
    #[pyo3(signature = (data, deviation = 0.1, max_interval = None, config_json = None))]
    fn new(
        data: &PyAny,
        deviation: f64,
        max_interval: Option<usize>,
        config_json: Option<String>,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => CompressorConfig::from_json_str(&json)?,
            None => build_config(deviation, max_interval)?,
        };

        let stream = PyPointStream {
            obj: data.iter()?.to_object(data.py()),
        };
        let inner = Compressor::new(config)?.compress_stream(stream)?;
        Ok(Self { inner })
    }

    fn __iter__(slf: Py<Self>) -> Py<Self> {
        slf
    }

    /// Returns the next retained anchor as an `(x, y)` tuple, or raises
    /// StopIteration once the source is exhausted.
    fn __next__(&mut self) -> PyResult<Option<(f64, f64)>> {
        match self.inner.next() {
            Some(Ok(point)) => Ok(Some(point.into())),
            Some(Err(err)) => Err(err.into()),
            None => Ok(None),
        }
    }

    /// Total number of input samples consumed so far.
    fn samples_consumed(&self) -> usize {
        self.inner.samples_consumed()
    }
}

//==================================================================================
// II. Stateless Eager API (for advanced/FFI use cases)
//==================================================================================

/// Compresses a Python iterable of `(x, y)` pairs into a list of retained
/// anchors.
#[pyfunction]
#[pyo3(name = "compress")]
#[pyo3(signature = (data, deviation = 0.1, max_interval = None))]
pub fn compress_py(
    py: Python,
    data: &PyAny,
    deviation: f64,
    max_interval: Option<usize>,
) -> PyResult<Vec<(f64, f64)>> {
    let config = build_config(deviation, max_interval)?;
    let stream = PyPointStream {
        obj: data.iter()?.to_object(py),
    };
    let compressor = Compressor::new(config)?.compress_stream(stream)?;

    let anchors: Vec<Point<f64>> =
        py.allow_threads(move || compressor.collect::<Result<_, _>>())?;
    Ok(anchors.into_iter().map(Into::into).collect())
}

/// Compresses a Python iterable eagerly and reports the size accounting
/// alongside the anchors.
#[pyfunction]
#[pyo3(name = "compress_analyze")]
#[pyo3(signature = (data, deviation = 0.1, max_interval = None))]
pub fn compress_analyze_py(
    py: Python,
    data: &PyAny,
    deviation: f64,
    max_interval: Option<usize>,
) -> PyResult<PyObject> {
    let config = build_config(deviation, max_interval)?;
    let stream = PyPointStream {
        obj: data.iter()?.to_object(py),
    };
    let mut compressor = Compressor::new(config)?.compress_stream(stream)?;

    let collected: Result<Vec<Point<f64>>, SwingDoorError> =
        py.allow_threads(|| compressor.by_ref().collect());
    let anchors = collected?;
    let stats = CompressionStats {
        input_points: compressor.samples_consumed(),
        output_points: anchors.len(),
    };

    let points: Vec<(f64, f64)> = anchors.into_iter().map(Into::into).collect();
    let result_dict = PyDict::new(py);
    result_dict.set_item("points", points)?;
    result_dict.set_item("input_points", stats.input_points)?;
    result_dict.set_item("output_points", stats.output_points)?;
    result_dict.set_item("ratio", stats.ratio())?;

    Ok(result_dict.into())
}

//==================================================================================
// III. Logging Control
//==================================================================================

static INIT_LOGGER: Once = Once::new();

#[pyfunction]
#[pyo3(name = "enable_verbose_logging")]
#[pyo3(signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(filename)
                .expect("Could not open log file in append mode");
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
}
