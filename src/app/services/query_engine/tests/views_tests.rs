//! Tests for the derived presentation views

use super::{create_scenario_dataset, dataset_from_csv};
use crate::app::services::query_engine::views::{
    self, MissionFilter, SortDirection, SortSpec,
};

mod filter_tests {
    use super::*;

    #[test]
    fn test_empty_filter_passes_everything() {
        let dataset = create_scenario_dataset();
        let filter = MissionFilter::default();

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&dataset), dataset);
    }

    #[test]
    fn test_filter_by_company() {
        let dataset = create_scenario_dataset();
        let filter = MissionFilter {
            company: Some("SpaceX".to_string()),
            ..Default::default()
        };

        let view = filter.apply(&dataset);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.field("Company") == "SpaceX"));
        // The source dataset is untouched.
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_filter_by_status() {
        let dataset = create_scenario_dataset();
        let filter = MissionFilter {
            status: Some("Success".to_string()),
            ..Default::default()
        };

        assert_eq!(filter.apply(&dataset).len(), 2);
    }

    #[test]
    fn test_filter_by_date_bounds() {
        let dataset = create_scenario_dataset();

        let from_march = MissionFilter {
            start_date: Some("2020-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(from_march.apply(&dataset).len(), 2);

        let until_march = MissionFilter {
            end_date: Some("2020-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(until_march.apply(&dataset).len(), 2);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let dataset = create_scenario_dataset();
        let filter = MissionFilter {
            company: Some("SpaceX".to_string()),
            status: Some("Success".to_string()),
            ..Default::default()
        };

        let view = filter.apply(&dataset);
        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].field("Mission"), "Starlink-1");
    }
}

mod sort_tests {
    use super::*;

    #[test]
    fn test_no_key_passes_through() {
        let dataset = create_scenario_dataset();
        let spec = SortSpec::default();

        assert_eq!(spec.apply(&dataset), dataset);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let dataset = create_scenario_dataset();

        let ascending = SortSpec::new(Some("Date".to_string()), SortDirection::Ascending);
        let view = ascending.apply(&dataset);
        let dates: Vec<&str> = view.iter().map(|r| r.field("Date")).collect();
        assert_eq!(dates, vec!["2020-01-01", "2020-03-01", "2020-06-01"]);

        let descending = SortSpec::new(Some("Date".to_string()), SortDirection::Descending);
        let view = descending.apply(&dataset);
        assert_eq!(view.records()[0].field("Date"), "2020-06-01");
        assert_eq!(view.records()[2].field("Date"), "2020-01-01");
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let dataset = dataset_from_csv(
            "Company,Mission\n\
             SpaceX,First\n\
             SpaceX,Second\n\
             NASA,Third\n",
        );
        let spec = SortSpec::new(Some("Company".to_string()), SortDirection::Ascending);

        let view = spec.apply(&dataset);
        let missions: Vec<&str> = view.iter().map(|r| r.field("Mission")).collect();
        assert_eq!(missions, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_toggle_flips_direction_on_repeated_key() {
        let mut spec = SortSpec::default();

        spec.toggle("Date");
        assert_eq!(spec.key.as_deref(), Some("Date"));
        assert_eq!(spec.direction, SortDirection::Ascending);

        spec.toggle("Date");
        assert_eq!(spec.direction, SortDirection::Descending);

        spec.toggle("Date");
        assert_eq!(spec.direction, SortDirection::Ascending);

        // A new key resets to ascending.
        spec.toggle("Date");
        spec.toggle("Company");
        assert_eq!(spec.key.as_deref(), Some("Company"));
        assert_eq!(spec.direction, SortDirection::Ascending);
    }
}

mod series_tests {
    use super::*;

    #[test]
    fn test_missions_per_year_sorted_ascending() {
        let dataset = dataset_from_csv(
            "Company,Date\n\
             A,2021-01-01\n\
             B,2019-05-01\n\
             C,2019-09-01\n\
             D,2020-02-01\n",
        );

        let series = views::missions_per_year(&dataset);
        let points: Vec<(&str, usize)> = series
            .iter()
            .map(|p| (p.year.as_str(), p.count))
            .collect();
        assert_eq!(points, vec![("2019", 2), ("2020", 1), ("2021", 1)]);
    }

    #[test]
    fn test_missions_per_year_skips_empty_dates() {
        let dataset = dataset_from_csv(
            "Company,Date\n\
             A,2020-01-01\n\
             B,\n",
        );

        let series = views::missions_per_year(&dataset);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].count, 1);
    }

    #[test]
    fn test_top_companies_caps_and_tie_breaks() {
        let dataset = dataset_from_csv(
            "Company,Date\n\
             Beta,2020-01-01\n\
             Alpha,2020-02-01\n\
             Gamma,2020-03-01\n\
             Gamma,2020-04-01\n",
        );

        let series = views::top_companies(&dataset, 2);
        let bars: Vec<(&str, usize)> = series
            .iter()
            .map(|b| (b.company.as_str(), b.count))
            .collect();
        assert_eq!(bars, vec![("Gamma", 2), ("Alpha", 1)]);
    }

    #[test]
    fn test_status_distribution_first_seen_order() {
        let dataset = dataset_from_csv(
            "Company,Date,MissionStatus\n\
             A,2020-01-01,Failure\n\
             B,2020-02-01,Success\n\
             C,2020-03-01,Failure\n\
             D,2020-04-01,In Progress\n",
        );

        let slices = views::status_distribution(&dataset);
        let pairs: Vec<(&str, usize)> = slices
            .iter()
            .map(|s| (s.status.as_str(), s.count))
            .collect();
        // Raw values in first-seen order, unrecognized ones included.
        assert_eq!(
            pairs,
            vec![("Failure", 2), ("Success", 1), ("In Progress", 1)]
        );
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn test_summary_stats() {
        let dataset = create_scenario_dataset();
        let stats = views::summary_stats(&dataset);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.success_rate, 66.67);
    }

    #[test]
    fn test_summary_stats_empty_view() {
        let dataset = dataset_from_csv("Company,Date,MissionStatus\n");
        let stats = views::summary_stats(&dataset);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_table_page_caps_rows_and_reports_total() {
        let mut text = String::from("Company,Date\n");
        for i in 0..150 {
            text.push_str(&format!("Company-{i},2020-01-01\n"));
        }
        let dataset = dataset_from_csv(&text);

        let page = views::table_page(&dataset, 100);
        assert_eq!(page.rows.len(), 100);
        assert_eq!(page.total, 150);
        assert_eq!(page.rows[0].field("Company"), "Company-0");

        let small_page = views::table_page(&dataset, 200);
        assert_eq!(small_page.rows.len(), 150);
    }
}
