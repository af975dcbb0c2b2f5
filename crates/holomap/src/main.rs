use miette::Result;

fn main() -> Result<()> {
    let data_dir = holomap::init::get_holomap_dir()?;
    let _log_guard = holo_core::trace::install_tracing(&data_dir)?;
    holomap::start_holomap(&data_dir)
}
