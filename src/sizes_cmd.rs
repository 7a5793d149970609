use crate::DemoResult;
use crate::core::catalog::base_record;
use crate::core::schema::ProblemSize;

/// One line per supported size with its nominal run time.
pub fn render_sizes() -> String {
    let mut out = String::from("SIZE  TARGET TIME  ITERATIONS\n");
    for size in ProblemSize::ALL {
        let base = base_record(size);
        out.push_str(&format!(
            "{:<4}  {:>10}s  {:>10}\n",
            size.label(),
            base.target_time_s,
            base.iterations
        ));
    }
    out
}

pub fn run() -> DemoResult<()> {
    print!("{}", render_sizes());
    Ok(())
}
