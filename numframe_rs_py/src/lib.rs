mod df;
mod random;
use pyo3::{prelude::*, py_run};

macro_rules! register_submodule {
    ($parent:expr, $hierarchy:expr) => {{
        let py = $parent.py();
        let module_name = $hierarchy.split('.').last().unwrap();
        let submodule = PyModule::new_bound(py, module_name)?;
        py_run!(
            py,
            submodule,
            concat!("import sys; sys.modules['", $hierarchy, "'] = submodule")
        );
        $parent.add_submodule(&submodule)?;
        submodule
    }};
}

#[pymodule]
fn numframe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let rs_module = register_submodule!(m, "numframe._rs");

    let df_module = register_submodule!(rs_module, "numframe._rs.df");
    df_module.add("ROW_PREFIX", numframe_core::df::ROW_PREFIX)?;
    df_module.add_class::<df::DataFrameF64>()?;

    let random_module = register_submodule!(rs_module, "numframe._rs.random");
    random_module.add_function(wrap_pyfunction!(random::generate_uniform, &random_module)?)?;
    random_module.add_function(wrap_pyfunction!(random::generate_gaussian, &random_module)?)?;
    random_module.add_function(wrap_pyfunction!(random::generate_exponential, &random_module)?)?;

    Ok(())
}
