use crate::chart::{self, ChartSpec};
use crate::data::error::Result;
use crate::data::filter::{filter_equals, Selection};
use crate::data::model::Table;
use crate::data::reshape::to_tidy;

// ---------------------------------------------------------------------------
// Per-tab views: render(request) -> view
// ---------------------------------------------------------------------------

/// Column the sidebar selector is bound to.
pub const GROOMING_COLUMN: &str = "Grooming Needs";

/// Id columns of the health table; everything else is a risk column.
pub const HEALTH_ID_COLUMNS: &[&str] = &["Breed", "Avg_Lifespan_Years", "Most_Common_Issue"];

/// Lifespan is descriptive, never part of the risk comparison.
pub const LIFESPAN_COLUMN: &str = "Avg_Lifespan_Years";

/// Derived data for the breeds tab.
pub struct BreedsView {
    /// Breeds matching the grooming selection.
    pub table: Table,
    pub weight_chart: ChartSpec,
    pub origin_chart: ChartSpec,
}

/// Derived data for the diet tab.
pub struct DietView {
    pub mineral_chart: ChartSpec,
}

/// Derived data for the health tab.
pub struct HealthView {
    /// Long-form (breed, risk type, risk index) rows.
    pub tidy: Table,
    pub risk_chart: ChartSpec,
}

/// Breeds tab: filter by grooming needs, chart weights by breed and
/// breed counts by origin.
pub fn breeds_view(breeds: &Table, selection: &Selection) -> Result<BreedsView> {
    let table = filter_equals(breeds, GROOMING_COLUMN, selection)?;
    let weight_chart = chart::bar_chart(
        &table,
        "Breed",
        "Average Weight (g)",
        Some("Coat Type"),
        "Average Weight Distribution by Breed (grams)",
    )?;
    let origin_chart = chart::pie_chart("Breeds by Origin", &table.value_counts("Origin")?);
    Ok(BreedsView {
        table,
        weight_chart,
        origin_chart,
    })
}

/// Diet tab: calcium vs phosphorus scatter, sized by serving.
pub fn diet_view(diet: &Table) -> Result<DietView> {
    let mineral_chart = chart::scatter_chart(
        diet,
        "Calcium (mg)",
        "Phosphorus (mg)",
        Some("Food Item"),
        Some("Category"),
        Some("Serving Size (g)"),
        "Calcium vs Phosphorus Content",
    )?;
    Ok(DietView { mineral_chart })
}

/// Health tab: unpivot the risk columns and chart them side by side.
pub fn health_view(health: &Table) -> Result<HealthView> {
    let tidy = to_tidy(
        health,
        HEALTH_ID_COLUMNS,
        LIFESPAN_COLUMN,
        "Risk_Type",
        "Risk_Index",
    )?;
    let risk_chart = chart::grouped_bar_chart(
        &tidy,
        "Breed",
        "Risk_Index",
        Some("Risk_Type"),
        "Comparative Health Risk Indices (Higher is worse)",
    )?;
    Ok(HealthView { tidy, risk_chart })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::BarMode;
    use crate::data::model::CellValue;

    fn breeds() -> Table {
        Table::new(
            vec![
                "Breed".into(),
                "Average Weight (g)".into(),
                "Coat Type".into(),
                "Grooming Needs".into(),
                "Origin".into(),
            ],
            vec![
                vec![
                    CellValue::String("Abyssinian".into()),
                    CellValue::Integer(850),
                    CellValue::String("Rosetted".into()),
                    CellValue::String("High".into()),
                    CellValue::String("Peru".into()),
                ],
                vec![
                    CellValue::String("American".into()),
                    CellValue::Integer(900),
                    CellValue::String("Smooth".into()),
                    CellValue::String("Low".into()),
                    CellValue::String("Peru".into()),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_breeds_view_filters_and_charts() {
        let selection = Selection::Value(CellValue::String("High".into()));
        let view = breeds_view(&breeds(), &selection).unwrap();
        assert_eq!(view.table.len(), 1);
        assert_eq!(
            view.table.cell(0, 0),
            Some(&CellValue::String("Abyssinian".into()))
        );
        let ChartSpec::Bar { categories, .. } = &view.weight_chart else {
            panic!("expected a bar spec");
        };
        assert_eq!(categories, &["Abyssinian"]);
        let ChartSpec::Pie { slices, .. } = &view.origin_chart else {
            panic!("expected a pie spec");
        };
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].name, "Peru");
    }

    #[test]
    fn test_breeds_view_all_keeps_every_row() {
        let view = breeds_view(&breeds(), &Selection::All).unwrap();
        assert_eq!(view.table.len(), 2);
    }

    #[test]
    fn test_health_view_melts_and_groups() {
        let health = Table::new(
            vec![
                "Breed".into(),
                "Avg_Lifespan_Years".into(),
                "Most_Common_Issue".into(),
                "Dental_Risk".into(),
                "Respiratory_Risk".into(),
            ],
            vec![vec![
                CellValue::String("Teddy".into()),
                CellValue::Integer(6),
                CellValue::String("Mites".into()),
                CellValue::Integer(3),
                CellValue::Integer(2),
            ]],
        )
        .unwrap();
        let view = health_view(&health).unwrap();
        assert_eq!(view.tidy.len(), 2);
        let ChartSpec::Bar { mode, series, .. } = &view.risk_chart else {
            panic!("expected a bar spec");
        };
        assert_eq!(*mode, BarMode::Group);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Dental_Risk");
        assert_eq!(series[0].values, vec![Some(3.0)]);
        assert_eq!(series[1].name, "Respiratory_Risk");
        assert_eq!(series[1].values, vec![Some(2.0)]);
    }

    #[test]
    fn test_diet_view_scatter_roles() {
        let diet = Table::new(
            vec![
                "Food Item".into(),
                "Category".into(),
                "Serving Size (g)".into(),
                "Calcium (mg)".into(),
                "Phosphorus (mg)".into(),
            ],
            vec![vec![
                CellValue::String("Kale".into()),
                CellValue::String("Vegetable".into()),
                CellValue::Integer(30),
                CellValue::Integer(150),
                CellValue::Integer(92),
            ]],
        )
        .unwrap();
        let view = diet_view(&diet).unwrap();
        let ChartSpec::Scatter {
            x_field,
            y_field,
            size_field,
            series,
            ..
        } = &view.mineral_chart
        else {
            panic!("expected a scatter spec");
        };
        assert_eq!(x_field, "Calcium (mg)");
        assert_eq!(y_field, "Phosphorus (mg)");
        assert_eq!(size_field.as_deref(), Some("Serving Size (g)"));
        assert_eq!(series[0].name, "Vegetable");
        assert_eq!(series[0].points[0].text.as_deref(), Some("Kale"));
    }
}
