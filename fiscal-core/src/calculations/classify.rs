//! Declaration classification: status partitions, summary statistics,
//! filtering and pagination over in-memory declaration lists.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{Declaration, DeclarationStatus, Period, TaxType};

/// Fixed page size for declaration history views.
pub const PAGE_SIZE: usize = 10;

/// Declarations partitioned by status. Partitions are disjoint and
/// exhaustive: every input declaration lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBuckets {
    pub pending: Vec<Declaration>,
    pub completed: Vec<Declaration>,
    pub draft: Vec<Declaration>,
    pub processing: Vec<Declaration>,
}

impl StatusBuckets {
    pub fn total(&self) -> usize {
        self.pending.len() + self.completed.len() + self.draft.len() + self.processing.len()
    }
}

/// Summary statistics over a declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Tax actually paid: sum of tax amounts over completed declarations.
    pub total_taxes_paid: Decimal,
    /// Mean tax amount over all declarations, completed or not.
    pub average_tax_amount: Decimal,
    /// Share of declarations that are completed, as a percentage.
    pub completed_percentage: Decimal,
    /// Total tax over total income, as a percentage.
    pub effective_rate: Decimal,
}

/// Partitions declarations by status.
pub fn classify(declarations: &[Declaration]) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for declaration in declarations {
        let bucket = match declaration.status {
            DeclarationStatus::Pending => &mut buckets.pending,
            DeclarationStatus::Completed => &mut buckets.completed,
            DeclarationStatus::Draft => &mut buckets.draft,
            DeclarationStatus::Processing => &mut buckets.processing,
        };
        bucket.push(declaration.clone());
    }
    buckets
}

/// The `n` most recent declarations, newest period first. Declarations in
/// the same period order by id ascending. The input is not mutated.
pub fn recent(declarations: &[Declaration], n: usize) -> Vec<Declaration> {
    let mut sorted = declarations.to_vec();
    sorted.sort_by(|a, b| b.period.cmp(&a.period).then(a.id.cmp(&b.id)));
    sorted.truncate(n);
    sorted
}

/// Computes summary statistics. All ratios guard division by zero and
/// report 0 instead.
pub fn statistics(declarations: &[Declaration]) -> Statistics {
    let total_taxes_paid: Decimal = declarations
        .iter()
        .filter(|d| d.status == DeclarationStatus::Completed)
        .map(|d| d.tax_amount)
        .sum();

    let total_tax: Decimal = declarations.iter().map(|d| d.tax_amount).sum();
    let total_income: Decimal = declarations.iter().map(|d| d.total_income).sum();
    let completed = declarations
        .iter()
        .filter(|d| d.status == DeclarationStatus::Completed)
        .count();

    let count = Decimal::from(declarations.len());
    let hundred = Decimal::ONE_HUNDRED;

    let average_tax_amount = if declarations.is_empty() {
        Decimal::ZERO
    } else {
        round_half_up(total_tax / count)
    };

    let completed_percentage = if declarations.is_empty() {
        Decimal::ZERO
    } else {
        round_half_up(Decimal::from(completed) * hundred / count)
    };

    let effective_rate = if total_income.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up(total_tax * hundred / total_income)
    };

    Statistics {
        total_taxes_paid,
        average_tax_amount,
        completed_percentage,
        effective_rate,
    }
}

/// Filter criteria for declaration history views. Unset fields match
/// everything; set fields must all hold for a declaration to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationFilter {
    pub status: Option<DeclarationStatus>,
    pub period: Option<Period>,
    pub tax_type_id: Option<i64>,
    /// Case-insensitive substring, matched against the period, the tax
    /// type name, and the status display label; any one hit qualifies.
    pub search: Option<String>,
}

impl DeclarationFilter {
    /// Applies the filter, resolving tax-type names for search from
    /// `tax_types`. Survivors come back newest period first, ties by id
    /// ascending, ready for display.
    pub fn apply(&self, declarations: &[Declaration], tax_types: &[TaxType]) -> Vec<Declaration> {
        let mut survivors: Vec<Declaration> = declarations
            .iter()
            .filter(|d| self.matches(d, tax_types))
            .cloned()
            .collect();
        survivors.sort_by(|a, b| b.period.cmp(&a.period).then(a.id.cmp(&b.id)));
        survivors
    }

    fn matches(&self, declaration: &Declaration, tax_types: &[TaxType]) -> bool {
        if let Some(status) = self.status
            && declaration.status != status
        {
            return false;
        }
        if let Some(period) = self.period
            && declaration.period != period
        {
            return false;
        }
        if let Some(tax_type_id) = self.tax_type_id
            && declaration.tax_type_id != tax_type_id
        {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let tax_type_name = tax_types
                .iter()
                .find(|t| t.id == declaration.tax_type_id)
                .map(|t| t.name.to_lowercase())
                .unwrap_or_default();

            let hit = declaration.period.to_string().contains(&term)
                || tax_type_name.contains(&term)
                || declaration.status.display_label().to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// One page of a paginated list, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slices `items` into the 1-indexed page `page` of [`PAGE_SIZE`] entries.
/// Out-of-range pages come back empty rather than erroring.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);

    let slice: &[T] = if page == 0 {
        &[]
    } else {
        let start = (page - 1) * PAGE_SIZE;
        if start >= total_items {
            &[]
        } else {
            let end = (start + PAGE_SIZE).min(total_items);
            &items[start..end]
        }
    };

    Page {
        items: slice.to_vec(),
        page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn declaration(
        id: i64,
        period: &str,
        status: DeclarationStatus,
        total_income: Decimal,
        tax_amount: Decimal,
    ) -> Declaration {
        Declaration {
            id,
            user_id: 1,
            period: Period::parse(period).unwrap(),
            total_income,
            total_expenses: dec!(0),
            taxable_income: total_income,
            tax_amount,
            status,
            tax_type_id: 1,
        }
    }

    fn tax_types() -> Vec<TaxType> {
        vec![TaxType {
            id: 1,
            name: "IR".to_string(),
            description: String::new(),
            rate: dec!(0.30),
        }]
    }

    // =========================================================================
    // classify tests
    // =========================================================================

    #[test]
    fn classify_partitions_are_exhaustive() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2025-01", DeclarationStatus::Completed, dec!(100), dec!(10)),
            declaration(3, "2025-01", DeclarationStatus::Draft, dec!(100), dec!(10)),
            declaration(4, "2025-01", DeclarationStatus::Processing, dec!(100), dec!(10)),
        ];

        let buckets = classify(&declarations);

        assert_eq!(buckets.pending.len(), 1);
        assert_eq!(buckets.completed.len(), 1);
        assert_eq!(buckets.draft.len(), 1);
        assert_eq!(buckets.processing.len(), 1);
        assert_eq!(buckets.total(), declarations.len());
    }

    #[test]
    fn classify_empty_input_yields_empty_buckets() {
        let buckets = classify(&[]);

        assert_eq!(buckets, StatusBuckets::default());
    }

    // =========================================================================
    // recent tests
    // =========================================================================

    #[test]
    fn recent_sorts_newest_period_first() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2025-03", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(3, "2025-02", DeclarationStatus::Pending, dec!(100), dec!(10)),
        ];

        let top = recent(&declarations, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, 2);
        assert_eq!(top[1].id, 3);
    }

    #[test]
    fn recent_breaks_period_ties_by_id_ascending() {
        let declarations = vec![
            declaration(9, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(3, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
        ];

        let top = recent(&declarations, 2);

        assert_eq!(top[0].id, 3);
        assert_eq!(top[1].id, 9);
    }

    #[test]
    fn recent_does_not_mutate_input() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2025-03", DeclarationStatus::Pending, dec!(100), dec!(10)),
        ];

        let _ = recent(&declarations, 1);

        assert_eq!(declarations[0].id, 1);
    }

    #[test]
    fn recent_handles_n_larger_than_input() {
        let declarations =
            vec![declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10))];

        assert_eq!(recent(&declarations, 5).len(), 1);
    }

    // =========================================================================
    // statistics tests
    // =========================================================================

    #[test]
    fn statistics_counts_only_completed_as_paid() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Completed, dec!(1000), dec!(100)),
            declaration(2, "2025-01", DeclarationStatus::Pending, dec!(1000), dec!(50)),
        ];

        let stats = statistics(&declarations);

        assert_eq!(stats.total_taxes_paid, dec!(100));
        assert_eq!(stats.average_tax_amount, dec!(75.00));
        assert_eq!(stats.completed_percentage, dec!(50.00));
    }

    #[test]
    fn statistics_effective_rate_uses_all_declarations() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Completed, dec!(1000), dec!(100)),
            declaration(2, "2025-01", DeclarationStatus::Pending, dec!(1000), dec!(50)),
        ];

        let stats = statistics(&declarations);

        // 150 / 2000 * 100
        assert_eq!(stats.effective_rate, dec!(7.50));
    }

    #[test]
    fn statistics_empty_input_is_all_zero() {
        let stats = statistics(&[]);

        assert_eq!(stats.total_taxes_paid, dec!(0));
        assert_eq!(stats.average_tax_amount, dec!(0));
        assert_eq!(stats.completed_percentage, dec!(0));
        assert_eq!(stats.effective_rate, dec!(0));
    }

    #[test]
    fn statistics_zero_income_reports_zero_effective_rate() {
        let declarations =
            vec![declaration(1, "2025-01", DeclarationStatus::Pending, dec!(0), dec!(0))];

        assert_eq!(statistics(&declarations).effective_rate, dec!(0));
    }

    // =========================================================================
    // filter tests
    // =========================================================================

    #[test]
    fn filter_by_status() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2025-01", DeclarationStatus::Completed, dec!(100), dec!(10)),
        ];
        let filter = DeclarationFilter {
            status: Some(DeclarationStatus::Completed),
            ..Default::default()
        };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn filter_by_period_is_exact() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2025-11", DeclarationStatus::Pending, dec!(100), dec!(10)),
        ];
        let filter = DeclarationFilter {
            period: Some(Period::parse("2025-01").unwrap()),
            ..Default::default()
        };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn filter_by_tax_type_id() {
        let mut other = declaration(2, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10));
        other.tax_type_id = 2;
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            other,
        ];
        let filter = DeclarationFilter { tax_type_id: Some(2), ..Default::default() };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn search_matches_period_substring() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2024-06", DeclarationStatus::Pending, dec!(100), dec!(10)),
        ];
        let filter = DeclarationFilter {
            search: Some("2024".to_string()),
            ..Default::default()
        };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn search_matches_tax_type_name_case_insensitive() {
        let declarations =
            vec![declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10))];
        let filter = DeclarationFilter { search: Some("ir".to_string()), ..Default::default() };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
    }

    #[test]
    fn search_matches_status_label() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Completed, dec!(100), dec!(10)),
            declaration(2, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
        ];
        let filter = DeclarationFilter {
            search: Some("completado".to_string()),
            ..Default::default()
        };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn search_miss_on_all_fields_excludes() {
        let declarations =
            vec![declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10))];
        let filter = DeclarationFilter {
            search: Some("zzz".to_string()),
            ..Default::default()
        };

        assert_eq!(filter.apply(&declarations, &tax_types()), vec![]);
    }

    #[test]
    fn combined_criteria_must_all_hold() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Completed, dec!(100), dec!(10)),
            declaration(2, "2025-02", DeclarationStatus::Completed, dec!(100), dec!(10)),
        ];
        let filter = DeclarationFilter {
            status: Some(DeclarationStatus::Completed),
            period: Some(Period::parse("2025-02").unwrap()),
            ..Default::default()
        };

        let result = filter.apply(&declarations, &tax_types());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn empty_filter_passes_everything_newest_first() {
        let declarations = vec![
            declaration(1, "2025-01", DeclarationStatus::Pending, dec!(100), dec!(10)),
            declaration(2, "2025-02", DeclarationStatus::Draft, dec!(100), dec!(10)),
        ];

        let result = DeclarationFilter::default().apply(&declarations, &tax_types());

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 2);
        assert_eq!(result[1].id, 1);
    }

    // =========================================================================
    // pagination tests
    // =========================================================================

    #[test]
    fn paginate_slices_25_items_into_3_pages() {
        let items: Vec<i32> = (1..=25).collect();

        let first = paginate(&items, 1);
        let last = paginate(&items, 3);

        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 25);
        assert_eq!(last.items, (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn paginate_out_of_range_page_is_empty() {
        let items: Vec<i32> = (1..=5).collect();

        let page = paginate(&items, 4);

        assert_eq!(page.items, Vec::<i32>::new());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn paginate_page_zero_is_empty() {
        let items: Vec<i32> = (1..=5).collect();

        assert_eq!(paginate(&items, 0).items, Vec::<i32>::new());
    }

    #[test]
    fn paginate_empty_list_has_zero_pages() {
        let page = paginate::<i32>(&[], 1);

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.items, Vec::<i32>::new());
    }
}
