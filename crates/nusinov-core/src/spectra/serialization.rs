use super::labeled::{LabeledResult, RowAxis};

pub fn format_fixed_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$}",
        width = width,
        precision = precision
    )
}

pub fn format_scientific_f64(value: f64) -> String {
    format!("{:>14.6E}", value)
}

/// Fixed-width text table: one line per band or line, one flux column per
/// observation, headed by the proxy values.
pub fn render_table(result: &LabeledResult) -> String {
    let (label, position) = match result.rows() {
        RowAxis::Bands(_) => ("band", "center"),
        RowAxis::Lines(_) => ("line", "lambda"),
    };

    let mut header = format!("{label:>6}{position:>10}");
    for value in &result.proxy().values {
        header.push_str(&format!(
            "{:>14}",
            format!("{}={}", result.proxy().name, format_fixed_f64(*value, 0, 2))
        ));
    }

    let mut lines = vec![format!("# {}", result.variable()), header];
    for (row, (number, position)) in result
        .rows()
        .numbers()
        .iter()
        .zip(result.rows().positions())
        .enumerate()
    {
        let mut line = format!("{number:>6}{}", format_fixed_f64(*position, 10, 3));
        for flux in result.row(row) {
            line.push_str(&format_scientific_f64(flux));
        }
        lines.push(line);
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
