use serde::Serialize;

use crate::data::error::Result;
use crate::data::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Chart specs – declarative, renderer-agnostic
// ---------------------------------------------------------------------------

/// How multiple bar series share a category slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Stack,
    Group,
}

/// One bar series: a value per category, `None` where the (category,
/// series) combination has no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// One scatter point. `size` is the raw size-field value; the renderer
/// maps it to a marker radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub text: Option<String>,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

/// A declarative chart description handed to the presentation shell:
/// chart type, field-role names for labelling, and resolved trace data.
/// Never the rendered pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar {
        title: String,
        x_field: String,
        y_field: String,
        color_field: Option<String>,
        mode: BarMode,
        categories: Vec<String>,
        series: Vec<BarSeries>,
    },
    Scatter {
        title: String,
        x_field: String,
        y_field: String,
        text_field: Option<String>,
        color_field: Option<String>,
        size_field: Option<String>,
        series: Vec<ScatterSeries>,
    },
    Pie {
        title: String,
        slices: Vec<PieSlice>,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Bar { title, .. }
            | ChartSpec::Scatter { title, .. }
            | ChartSpec::Pie { title, .. } => title,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders – pure table → spec mappings
// ---------------------------------------------------------------------------

/// Stacked bar chart: one series per distinct `color` value.
pub fn bar_chart(
    table: &Table,
    x: &str,
    y: &str,
    color: Option<&str>,
    title: &str,
) -> Result<ChartSpec> {
    build_bar(table, x, y, color, title, BarMode::Stack)
}

/// Side-by-side bars per category, the `barmode="group"` variant.
pub fn grouped_bar_chart(
    table: &Table,
    x: &str,
    y: &str,
    color: Option<&str>,
    title: &str,
) -> Result<ChartSpec> {
    build_bar(table, x, y, color, title, BarMode::Group)
}

fn build_bar(
    table: &Table,
    x: &str,
    y: &str,
    color: Option<&str>,
    title: &str,
    mode: BarMode,
) -> Result<ChartSpec> {
    let x_idx = table.require_column(x)?;
    let y_idx = table.require_column(y)?;
    let color_idx = color.map(|c| table.require_column(c)).transpose()?;

    let categories = distinct_labels(table, x_idx);
    let series_names = match color_idx {
        Some(ci) => distinct_labels(table, ci),
        None => vec![y.to_string()],
    };
    let mut series: Vec<BarSeries> = series_names
        .into_iter()
        .map(|name| BarSeries {
            name,
            values: vec![None; categories.len()],
        })
        .collect();

    for row in table.rows() {
        let Some(v) = row[y_idx].as_f64() else {
            continue;
        };
        let cat = row[x_idx].to_string();
        let ci = categories.iter().position(|c| *c == cat).unwrap_or(0);
        let si = match color_idx {
            Some(idx) => {
                let label = row[idx].to_string();
                series.iter().position(|s| s.name == label).unwrap_or(0)
            }
            None => 0,
        };
        // Rows sharing (category, series) sum their y values.
        let slot = &mut series[si].values[ci];
        *slot = Some(slot.unwrap_or(0.0) + v);
    }

    Ok(ChartSpec::Bar {
        title: title.to_string(),
        x_field: x.to_string(),
        y_field: y.to_string(),
        color_field: color.map(str::to_string),
        mode,
        categories,
        series,
    })
}

/// Annotated scatter: one series per distinct `color` value; rows whose
/// x or y cell is not numeric are skipped.
pub fn scatter_chart(
    table: &Table,
    x: &str,
    y: &str,
    text: Option<&str>,
    color: Option<&str>,
    size: Option<&str>,
    title: &str,
) -> Result<ChartSpec> {
    let x_idx = table.require_column(x)?;
    let y_idx = table.require_column(y)?;
    let text_idx = text.map(|c| table.require_column(c)).transpose()?;
    let color_idx = color.map(|c| table.require_column(c)).transpose()?;
    let size_idx = size.map(|c| table.require_column(c)).transpose()?;

    let series_names = match color_idx {
        Some(ci) => distinct_labels(table, ci),
        None => vec![y.to_string()],
    };
    let mut series: Vec<ScatterSeries> = series_names
        .into_iter()
        .map(|name| ScatterSeries {
            name,
            points: Vec::new(),
        })
        .collect();

    for row in table.rows() {
        let (Some(px), Some(py)) = (row[x_idx].as_f64(), row[y_idx].as_f64()) else {
            continue;
        };
        let si = match color_idx {
            Some(idx) => {
                let label = row[idx].to_string();
                series.iter().position(|s| s.name == label).unwrap_or(0)
            }
            None => 0,
        };
        let text = text_idx.and_then(|ti| match &row[ti] {
            CellValue::Null => None,
            other => Some(other.to_string()),
        });
        series[si].points.push(ScatterPoint {
            x: px,
            y: py,
            text,
            size: size_idx.and_then(|zi| row[zi].as_f64()),
        });
    }

    Ok(ChartSpec::Scatter {
        title: title.to_string(),
        x_field: x.to_string(),
        y_field: y.to_string(),
        text_field: text.map(str::to_string),
        color_field: color.map(str::to_string),
        size_field: size.map(str::to_string),
        series,
    })
}

/// Proportion chart from a precomputed (name, count) frequency mapping,
/// typically [`Table::value_counts`] output.
pub fn pie_chart(title: &str, values_by_name: &[(String, usize)]) -> ChartSpec {
    ChartSpec::Pie {
        title: title.to_string(),
        slices: values_by_name
            .iter()
            .map(|(name, count)| PieSlice {
                name: name.clone(),
                value: *count as f64,
            })
            .collect(),
    }
}

fn distinct_labels(table: &Table, idx: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in table.rows() {
        let label = row[idx].to_string();
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breeds() -> Table {
        Table::new(
            vec![
                "Breed".into(),
                "Average Weight (g)".into(),
                "Coat Type".into(),
            ],
            vec![
                vec![
                    CellValue::String("Abyssinian".into()),
                    CellValue::Integer(850),
                    CellValue::String("Rosetted".into()),
                ],
                vec![
                    CellValue::String("American".into()),
                    CellValue::Integer(900),
                    CellValue::String("Smooth".into()),
                ],
                vec![
                    CellValue::String("Peruvian".into()),
                    CellValue::Integer(1000),
                    CellValue::String("Long-haired".into()),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bar_chart_one_series_per_coat_type() {
        let t = breeds();
        let spec = bar_chart(
            &t,
            "Breed",
            "Average Weight (g)",
            Some("Coat Type"),
            "Weights",
        )
        .unwrap();
        let ChartSpec::Bar {
            mode,
            categories,
            series,
            ..
        } = &spec
        else {
            panic!("expected a bar spec");
        };
        assert_eq!(*mode, BarMode::Stack);
        assert_eq!(categories, &["Abyssinian", "American", "Peruvian"]);
        assert_eq!(series.len(), 3);
        // Each coat type has a value only at its own breed's slot.
        assert_eq!(series[0].name, "Rosetted");
        assert_eq!(series[0].values, vec![Some(850.0), None, None]);
        assert_eq!(series[1].values, vec![None, Some(900.0), None]);
        assert_eq!(series[2].values, vec![None, None, Some(1000.0)]);
    }

    #[test]
    fn test_bar_chart_sums_duplicate_pairs() {
        let t = Table::new(
            vec!["Breed".into(), "Risk_Index".into(), "Risk_Type".into()],
            vec![
                vec![
                    CellValue::String("Teddy".into()),
                    CellValue::Integer(3),
                    CellValue::String("Dental_Risk".into()),
                ],
                vec![
                    CellValue::String("Teddy".into()),
                    CellValue::Integer(2),
                    CellValue::String("Dental_Risk".into()),
                ],
            ],
        )
        .unwrap();
        let spec =
            grouped_bar_chart(&t, "Breed", "Risk_Index", Some("Risk_Type"), "Risks").unwrap();
        let ChartSpec::Bar { mode, series, .. } = &spec else {
            panic!("expected a bar spec");
        };
        assert_eq!(*mode, BarMode::Group);
        assert_eq!(series[0].values, vec![Some(5.0)]);
    }

    #[test]
    fn test_bar_chart_without_color_has_single_series() {
        let t = breeds();
        let spec = bar_chart(&t, "Breed", "Average Weight (g)", None, "Weights").unwrap();
        let ChartSpec::Bar { series, .. } = &spec else {
            panic!("expected a bar spec");
        };
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Average Weight (g)");
        assert_eq!(series[0].values, vec![Some(850.0), Some(900.0), Some(1000.0)]);
    }

    #[test]
    fn test_builders_do_not_mutate_input() {
        let t = breeds();
        let before = t.clone();
        bar_chart(&t, "Breed", "Average Weight (g)", Some("Coat Type"), "w").unwrap();
        scatter_chart(
            &t,
            "Average Weight (g)",
            "Average Weight (g)",
            Some("Breed"),
            None,
            None,
            "s",
        )
        .unwrap();
        assert_eq!(t, before);
    }

    #[test]
    fn test_scatter_chart_skips_non_numeric_rows() {
        let t = Table::new(
            vec![
                "Food Item".into(),
                "Calcium (mg)".into(),
                "Phosphorus (mg)".into(),
                "Category".into(),
                "Serving Size (g)".into(),
            ],
            vec![
                vec![
                    CellValue::String("Kale".into()),
                    CellValue::Integer(150),
                    CellValue::Integer(92),
                    CellValue::String("Vegetable".into()),
                    CellValue::Integer(30),
                ],
                vec![
                    CellValue::String("Mystery".into()),
                    CellValue::Null,
                    CellValue::Integer(10),
                    CellValue::String("Vegetable".into()),
                    CellValue::Integer(20),
                ],
            ],
        )
        .unwrap();
        let spec = scatter_chart(
            &t,
            "Calcium (mg)",
            "Phosphorus (mg)",
            Some("Food Item"),
            Some("Category"),
            Some("Serving Size (g)"),
            "Calcium vs Phosphorus Content",
        )
        .unwrap();
        let ChartSpec::Scatter { series, .. } = &spec else {
            panic!("expected a scatter spec");
        };
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points.len(), 1);
        let p = &series[0].points[0];
        assert_eq!((p.x, p.y), (150.0, 92.0));
        assert_eq!(p.text.as_deref(), Some("Kale"));
        assert_eq!(p.size, Some(30.0));
    }

    #[test]
    fn test_pie_chart_passes_slices_through() {
        let spec = pie_chart(
            "Breeds by Origin",
            &[("Peru".to_string(), 3), ("England".to_string(), 1)],
        );
        let ChartSpec::Pie { slices, .. } = &spec else {
            panic!("expected a pie spec");
        };
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].name, "Peru");
        assert_eq!(slices[0].value, 3.0);
    }

    #[test]
    fn test_spec_serializes_with_type_tag() {
        let spec = pie_chart("p", &[("a".to_string(), 1)]);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "pie");

        let t = breeds();
        let spec = grouped_bar_chart(&t, "Breed", "Average Weight (g)", None, "w").unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["mode"], "group");
        assert_eq!(json["x_field"], "Breed");
    }
}
