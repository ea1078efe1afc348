use chrono::NaiveDate;
use rand::Rng;

use crate::model::config::SeedLists;
use crate::model::row::Row;

/// Generate the initial row list: `count` rows with unique sequential keys,
/// sample fields cycled from the configured lists, and day-of-month dates
/// randomized within the two configured months.
pub fn seed_rows(lists: &SeedLists, count: usize, rng: &mut impl Rng) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let (created_year, created_month) = lists.created_month;
            let (due_year, due_month) = lists.due_month;
            Row {
                key: format!("item-{}", i),
                project: cycle(&lists.projects, i),
                task: cycle(&lists.tasks, i),
                assigned: cycle(&lists.assignees, i),
                date_created: random_date(created_year, created_month, rng),
                date_due: random_date(due_year, due_month, rng),
                status: if i % 2 == 0 {
                    "In Progress".to_string()
                } else {
                    "Completed".to_string()
                },
                description: cycle(&lists.descriptions, i),
                description_expanded: false,
            }
        })
        .collect()
}

fn cycle(list: &[String], i: usize) -> String {
    if list.is_empty() {
        return String::new();
    }
    list[i % list.len()].clone()
}

/// A `M/D/YYYY` date on a random day (1–28) of the given month.
fn random_date(year: i32, month: u32, rng: &mut impl Rng) -> String {
    let day = rng.random_range(1..=28);
    format_date(year, month, day)
}

fn format_date(year: i32, month: u32, day: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| format!("{}/{}/{}", month, day, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn seeded(count: usize) -> Vec<Row> {
        let mut rng = StdRng::seed_from_u64(7);
        seed_rows(&SeedLists::default(), count, &mut rng)
    }

    #[test]
    fn keys_are_unique_and_sequential() {
        let rows = seeded(10);
        assert_eq!(rows.len(), 10);
        let keys: HashSet<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys.len(), 10);
        assert_eq!(rows[0].key, "item-0");
        assert_eq!(rows[9].key, "item-9");
    }

    #[test]
    fn sample_fields_cycle() {
        let lists = SeedLists::default();
        let rows = seeded(lists.projects.len() + 1);
        assert_eq!(rows[0].project, lists.projects[0]);
        assert_eq!(rows[lists.projects.len()].project, lists.projects[0]);
        assert_eq!(rows[1].assigned, lists.assignees[1]);
    }

    #[test]
    fn status_alternates() {
        let rows = seeded(4);
        assert_eq!(rows[0].status, "In Progress");
        assert_eq!(rows[1].status, "Completed");
        assert_eq!(rows[2].status, "In Progress");
        assert_eq!(rows[3].status, "Completed");
    }

    #[test]
    fn dates_land_in_configured_months() {
        for row in seeded(50) {
            assert!(row.date_created.starts_with("1/"), "{}", row.date_created);
            assert!(row.date_created.ends_with("/2025"), "{}", row.date_created);
            assert!(row.date_due.starts_with("2/"), "{}", row.date_due);
            let day: u32 = row.date_created.split('/').nth(1).unwrap().parse().unwrap();
            assert!((1..=28).contains(&day));
        }
    }

    #[test]
    fn descriptions_start_collapsed() {
        assert!(seeded(10).iter().all(|r| !r.description_expanded));
    }

    #[test]
    fn fixed_rng_seed_is_deterministic() {
        let a = seeded(10);
        let b = seeded(10);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_lists_produce_empty_fields() {
        let lists = SeedLists {
            projects: vec![],
            tasks: vec![],
            assignees: vec![],
            descriptions: vec![],
            ..SeedLists::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let rows = seed_rows(&lists, 2, &mut rng);
        assert_eq!(rows[0].project, "");
        assert_eq!(rows[1].task, "");
    }

    #[test]
    fn out_of_range_month_still_formats() {
        assert_eq!(format_date(2025, 13, 5), "13/5/2025");
        assert_eq!(format_date(2025, 2, 5), "2/5/2025");
    }
}
