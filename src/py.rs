use crate::trackers::sort::sort_py::PySort;
use pyo3::prelude::*;

#[pymodule]
#[pyo3(name = "sortrack")]
fn sortrack(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add_class::<PySort>()?;
    Ok(())
}
