use serde::Serialize;

use crate::catalogue::Catalogue;
use crate::model::{AgeBand, Category, ResponseRecord};

//
// ─── TALLIES ───────────────────────────────────────────────────────────────────
//

/// Completion of one category, counted across every band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub yes: usize,
    pub answered: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Answer counts for a single band, one entry per category in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandProgress {
    pub band: AgeBand,
    pub categories: Vec<CategoryProgress>,
}

impl BandProgress {
    #[must_use]
    pub fn answered(&self) -> usize {
        self.categories.iter().map(|c| c.answered).sum()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.total).sum()
    }

    /// True once every question in the band has an answer, yes or no.
    #[must_use]
    pub fn is_fully_answered(&self) -> bool {
        self.answered() == self.total()
    }
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Derived completion percentages. Never persisted; rebuilt from the
/// response table by a full rescan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    categories: Vec<CategoryProgress>,
    overall: u8,
    bands: Vec<BandProgress>,
    ignored: usize,
}

impl ProgressReport {
    /// Report for a catalogue with no answers.
    #[must_use]
    pub fn empty(catalogue: &Catalogue) -> Self {
        Self::compute(catalogue, std::iter::empty())
    }

    /// Rescans `records` against `catalogue`.
    ///
    /// Expects at most one record per key. Records that do not name a
    /// catalogue question are counted in `ignored()` and otherwise skipped.
    #[must_use]
    pub fn compute<'a>(
        catalogue: &Catalogue,
        records: impl IntoIterator<Item = &'a ResponseRecord>,
    ) -> Self {
        let band_list: Vec<AgeBand> = catalogue.bands().collect();
        // [band][category] -> (answered, yes)
        let mut counts = vec![[(0_usize, 0_usize); Category::COUNT]; band_list.len()];
        let mut ignored = 0;

        for record in records {
            if !catalogue.contains(&record.key()) {
                ignored += 1;
                continue;
            }
            let Ok(row) = band_list.binary_search(&record.age_band()) else {
                ignored += 1;
                continue;
            };
            let cell = &mut counts[row][record.category().index()];
            cell.0 += 1;
            if record.answer() {
                cell.1 += 1;
            }
        }

        let bands: Vec<BandProgress> = band_list
            .iter()
            .zip(counts.iter())
            .map(|(band, row)| BandProgress {
                band: *band,
                categories: Category::ALL
                    .iter()
                    .map(|category| {
                        let (answered, yes) = row[category.index()];
                        let total = catalogue
                            .questions(*band, *category)
                            .map_or(0, <[String]>::len);
                        CategoryProgress {
                            category: *category,
                            yes,
                            answered,
                            total,
                            percentage: percentage(yes, total),
                        }
                    })
                    .collect(),
            })
            .collect();

        let categories: Vec<CategoryProgress> = Category::ALL
            .iter()
            .map(|category| {
                let (yes, answered) = bands.iter().fold((0, 0), |(yes, answered), band| {
                    let c = &band.categories[category.index()];
                    (yes + c.yes, answered + c.answered)
                });
                let total = catalogue.total_for(*category);
                CategoryProgress {
                    category: *category,
                    yes,
                    answered,
                    total,
                    percentage: percentage(yes, total),
                }
            })
            .collect();

        let sum: u32 = categories.iter().map(|c| u32::from(c.percentage)).sum();
        let overall = u8::try_from(sum / 4).unwrap_or(100);

        Self {
            categories,
            overall,
            bands,
            ignored,
        }
    }

    /// Floored percentage of yes answers for `category` over all bands.
    #[must_use]
    pub fn category_percentage(&self, category: Category) -> u8 {
        self.categories[category.index()].percentage
    }

    /// Floored mean of the four category percentages.
    #[must_use]
    pub fn overall_percentage(&self) -> u8 {
        self.overall
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryProgress] {
        &self.categories
    }

    #[must_use]
    pub fn bands(&self) -> &[BandProgress] {
        &self.bands
    }

    #[must_use]
    pub fn band(&self, band: AgeBand) -> Option<&BandProgress> {
        self.bands.iter().find(|b| b.band == band)
    }

    /// Records skipped because they do not match any catalogue question.
    #[must_use]
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

fn percentage(yes: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = yes.min(total) * 100 / total;
    u8::try_from(pct).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn band(n: u8) -> AgeBand {
        AgeBand::new(n).unwrap()
    }

    fn yes(catalogue: &Catalogue, b: u8, category: Category, index: usize) -> ResponseRecord {
        answer(catalogue, b, category, index, true)
    }

    fn answer(
        catalogue: &Catalogue,
        b: u8,
        category: Category,
        index: usize,
        value: bool,
    ) -> ResponseRecord {
        let text = catalogue.question(band(b), category, index).unwrap();
        ResponseRecord::new(band(b), category, text, value, fixed_now()).unwrap()
    }

    #[test]
    fn empty_report_is_zero_everywhere() {
        let catalogue = Catalogue::standard().unwrap();
        let report = ProgressReport::empty(&catalogue);
        for category in Category::ALL {
            assert_eq!(report.category_percentage(category), 0);
        }
        assert_eq!(report.overall_percentage(), 0);
        assert_eq!(report.bands().len(), 10);
    }

    #[test]
    fn category_percentage_counts_across_all_bands() {
        let catalogue = Catalogue::standard().unwrap();
        let records: Vec<_> = (0..3)
            .map(|i| yes(&catalogue, 1, Category::Motor, i))
            .collect();
        let report = ProgressReport::compute(&catalogue, &records);

        let total = catalogue.total_for(Category::Motor);
        assert_eq!(
            usize::from(report.category_percentage(Category::Motor)),
            300 / total
        );
        let first = report.band(band(1)).unwrap();
        assert_eq!(first.categories[Category::Motor.index()].percentage, 100);
    }

    #[test]
    fn no_answers_do_not_count_toward_percentage() {
        let catalogue = Catalogue::standard().unwrap();
        let records = vec![
            answer(&catalogue, 2, Category::Feeding, 0, false),
            answer(&catalogue, 2, Category::Feeding, 1, false),
        ];
        let report = ProgressReport::compute(&catalogue, &records);
        assert_eq!(report.category_percentage(Category::Feeding), 0);
        let tally = report.categories()[Category::Feeding.index()];
        assert_eq!(tally.answered, 2);
        assert_eq!(tally.yes, 0);
    }

    #[test]
    fn overall_is_floored_mean_of_categories() {
        let entries = Category::ALL
            .into_iter()
            .map(|c| (band(1), c, vec!["a".into(), "b".into(), "c".into()]))
            .collect::<Vec<_>>();
        let catalogue = Catalogue::from_entries(entries).unwrap();
        let records = vec![
            yes(&catalogue, 1, Category::Motor, 0),
            yes(&catalogue, 1, Category::Motor, 1),
            yes(&catalogue, 1, Category::Motor, 2),
            yes(&catalogue, 1, Category::Sensory, 0),
        ];
        let report = ProgressReport::compute(&catalogue, &records);
        assert_eq!(report.category_percentage(Category::Motor), 100);
        assert_eq!(report.category_percentage(Category::Sensory), 33);
        // (100 + 33 + 0 + 0) / 4 = 33.25
        assert_eq!(report.overall_percentage(), 33);
    }

    #[test]
    fn stale_records_are_ignored() {
        let catalogue = Catalogue::standard().unwrap();
        let stale = ResponseRecord::new(
            band(1),
            Category::Motor,
            "Does your baby juggle?",
            true,
            fixed_now(),
        )
        .unwrap();
        let report = ProgressReport::compute(&catalogue, [&stale]);
        assert_eq!(report.ignored(), 1);
        assert_eq!(report.category_percentage(Category::Motor), 0);
    }

    #[test]
    fn every_yes_reaches_one_hundred() {
        let catalogue = Catalogue::standard().unwrap();
        let mut records = Vec::new();
        for b in catalogue.bands() {
            for c in Category::ALL {
                for i in 0..catalogue.questions(b, c).unwrap().len() {
                    records.push(yes(&catalogue, b.value(), c, i));
                }
            }
        }
        let report = ProgressReport::compute(&catalogue, &records);
        assert_eq!(report.overall_percentage(), 100);
        assert!(report.bands().iter().all(BandProgress::is_fully_answered));
    }

    #[test]
    fn percentage_floors_and_handles_zero_total() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 66);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 5), 100);
    }
}
