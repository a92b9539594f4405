use std::sync::Arc;

use milestone_core::model::{AgeBand, Category};
use milestone_core::time::fixed_now;
use milestone_core::Catalogue;
use services::{Clock, MilestoneService, MilestoneTracker, Position};
use storage::repository::InMemoryRepository;

fn band(n: u8) -> AgeBand {
    AgeBand::new(n).unwrap()
}

fn service(repo: &InMemoryRepository) -> MilestoneService {
    MilestoneService::new(
        Clock::fixed(fixed_now()),
        Arc::new(Catalogue::standard().unwrap()),
        Arc::new(repo.clone()),
    )
}

/// Jump to a specific question and answer it.
fn answer_at(
    tracker: &mut MilestoneTracker,
    b: u8,
    category: Category,
    index: usize,
    yes: bool,
) {
    assert!(tracker.select_age_band(b));
    tracker.select_category(category);
    assert!(tracker.select_question(index));
    tracker.answer(yes, fixed_now()).unwrap();
}

#[tokio::test]
async fn first_band_motor_all_yes() {
    let repo = InMemoryRepository::new();
    let svc = service(&repo);
    let mut tracker = svc.tracker();

    for _ in 0..3 {
        svc.answer(&mut tracker, true).await.unwrap();
    }

    let report = tracker.progress();
    let band1 = report.band(band(1)).unwrap();
    assert_eq!(band1.categories[Category::Motor.index()].percentage, 100);

    let total = svc.catalogue().total_for(Category::Motor);
    assert_eq!(
        usize::from(tracker.category_percentage(Category::Motor)),
        300 / total
    );
    assert_eq!(
        tracker.position(),
        Position::Question {
            band: band(1),
            category: Category::Sensory,
            index: 0
        }
    );
}

#[test]
fn category_percentage_matches_yes_over_total() {
    let catalogue = Arc::new(Catalogue::standard().unwrap());
    let mut tracker = MilestoneTracker::new(Arc::clone(&catalogue));

    answer_at(&mut tracker, 1, Category::Feeding, 0, true);
    answer_at(&mut tracker, 4, Category::Feeding, 2, true);
    answer_at(&mut tracker, 9, Category::Feeding, 1, false);
    answer_at(&mut tracker, 10, Category::Feeding, 0, true);

    let total = catalogue.total_for(Category::Feeding);
    assert_eq!(
        usize::from(tracker.category_percentage(Category::Feeding)),
        100 * 3 / total
    );
}

#[test]
fn overall_is_floored_mean_of_four_categories() {
    let catalogue = Arc::new(Catalogue::standard().unwrap());
    let mut tracker = MilestoneTracker::new(Arc::clone(&catalogue));

    for (i, category) in Category::ALL.into_iter().enumerate() {
        for k in 0..=i.min(2) {
            answer_at(&mut tracker, 2, category, k, true);
        }
    }

    let sum: u32 = Category::ALL
        .iter()
        .map(|c| u32::from(tracker.category_percentage(*c)))
        .sum();
    assert_eq!(u32::from(tracker.overall_percentage()), sum / 4);
}

#[tokio::test]
async fn walking_a_band_completes_it_exactly_once() {
    let repo = InMemoryRepository::new();
    let svc = service(&repo);
    let mut tracker = svc.tracker();
    assert!(tracker.select_age_band(3));

    let mut completions = 0;
    while tracker.current_question().is_some() {
        if svc.answer(&mut tracker, true).await.unwrap().band_completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert!(tracker.is_band_complete(band(3)));

    // Re-walk the band; it stays in the set without being reported again.
    assert!(tracker.select_age_band(3));
    while tracker.current_question().is_some() {
        assert!(!svc.answer(&mut tracker, false).await.unwrap().band_completed);
    }
    assert_eq!(tracker.completed_bands().collect::<Vec<_>>(), vec![band(3)]);

    let band3 = tracker.progress().band(band(3)).unwrap().clone();
    assert_eq!(repo_len(&repo).await, band3.total());
}

async fn repo_len(repo: &InMemoryRepository) -> usize {
    use storage::repository::ResponseRepository;
    repo.all_responses().await.unwrap().len()
}

#[tokio::test]
async fn reload_matches_interactive_answers_in_any_order() {
    let plan: Vec<(u8, Category, usize, bool)> = vec![
        (1, Category::Motor, 0, true),
        (1, Category::Motor, 2, false),
        (2, Category::Sensory, 1, true),
        (5, Category::Communication, 3, true),
        (7, Category::Feeding, 0, true),
        (10, Category::Motor, 1, false),
        (10, Category::Feeding, 2, true),
    ];

    let repo = InMemoryRepository::new();
    let svc = service(&repo);
    let mut forward = svc.tracker();
    for (b, c, i, yes) in &plan {
        assert!(forward.select_age_band(*b));
        forward.select_category(*c);
        assert!(forward.select_question(*i));
        svc.answer(&mut forward, *yes).await.unwrap();
    }

    let mut backward = svc.tracker();
    for (b, c, i, yes) in plan.iter().rev() {
        answer_at(&mut backward, *b, *c, *i, *yes);
    }

    let (reloaded, report) = svc.load().await.unwrap();
    assert_eq!(report.applied, plan.len());
    assert_eq!(report.skipped, 0);

    let mut shuffled = svc.tracker();
    let mut records = svc.all_responses().await.unwrap();
    records.reverse();
    shuffled.restore(records);

    for other in [&backward, &reloaded, &shuffled] {
        assert_eq!(other.responses(), forward.responses());
        assert_eq!(other.progress(), forward.progress());
    }
}

#[test]
fn reanswering_reflects_only_latest_value() {
    let catalogue = Arc::new(Catalogue::standard().unwrap());
    let mut tracker = MilestoneTracker::new(Arc::clone(&catalogue));

    answer_at(&mut tracker, 6, Category::Sensory, 0, true);
    let once = tracker.category_percentage(Category::Sensory);
    answer_at(&mut tracker, 6, Category::Sensory, 0, true);
    assert_eq!(tracker.category_percentage(Category::Sensory), once);
    assert_eq!(tracker.response_count(), 1);

    answer_at(&mut tracker, 6, Category::Sensory, 0, false);
    assert_eq!(tracker.category_percentage(Category::Sensory), 0);
    let question = catalogue.question(band(6), Category::Sensory, 0).unwrap();
    assert_eq!(
        tracker.get_response(band(6), Category::Sensory, question),
        Some(false)
    );
}
