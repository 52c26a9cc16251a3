use crate::modules::habits::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::use_cases::handler::HabitCommandHandler;
use crate::modules::habits::use_cases::list_habits_by_user::handler::{Paging, list_habits};
use crate::modules::habits::use_cases::list_habits_by_user::projector::Projector;
use crate::modules::habits::use_cases::list_habits_by_user::queries_port::HabitQueries;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::tests::fixtures::commands::create_habit::CreateHabitBuilder;
use crate::tests::fixtures::commands::record_completion::RecordCompletionBuilder;
use crate::tests::fixtures::fixed_today;
use chrono::Days;
use std::sync::Arc;

#[tokio::test]
async fn lists_habits_by_user() {
    let store = Arc::new(InMemoryEventStore::<HabitEvent>::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector::new("habits-by-user", projections.clone(), projections.clone());
    let handler = HabitCommandHandler::new("habits", store.clone(), outbox.clone());

    let commands: Vec<_> = [1000, 3000, 2000]
        .into_iter()
        .map(|created_at| {
            CreateHabitBuilder::new()
                .habit_id(format!("habit-{created_at}"))
                .name(format!("Habit created at {created_at}"))
                .created_at(created_at)
                .build()
        })
        .collect();

    for command in commands.iter().cloned() {
        let stream_id = format!("Habit-{}", command.habit_id);
        handler.create_habit(command).await.unwrap();

        let loaded = store.load(&stream_id).await.unwrap();
        projector
            .apply_one(&stream_id, 1, loaded.events.first().unwrap())
            .await
            .unwrap();
    }

    let list = projections
        .list_by_user_id("user-fixed-0001", 0, 10, true)
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list[0].created_at >= list[1].created_at);
    assert_eq!(list[0].habit_id, commands[1].habit_id);
    assert_eq!(outbox.rows().await.len(), 3);
}

#[tokio::test]
async fn lists_habits_with_streaks_recomputed_for_the_reference_day() {
    let store = Arc::new(InMemoryEventStore::<HabitEvent>::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector::new("habits-by-user", projections.clone(), projections.clone());
    let handler = HabitCommandHandler::new(
        "habits",
        store.clone(),
        Arc::new(InMemoryDomainOutbox::new()),
    );

    let created = handler
        .create_habit(CreateHabitBuilder::new().build())
        .await
        .unwrap();
    projector
        .apply_committed(&created.stream_id, created.starting_version, &created.events)
        .await
        .unwrap();

    for ago in [2, 1, 0] {
        let day = fixed_today().checked_sub_days(Days::new(ago)).unwrap();
        let committed = handler
            .record_completion(RecordCompletionBuilder::new().day(day).build())
            .await
            .unwrap();
        projector
            .apply_committed(&committed.stream_id, committed.starting_version, &committed.events)
            .await
            .unwrap();
    }

    let row = projections
        .get_by_id("user-fixed-0001", "habit-fixed-0001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!((row.current_streak, row.max_streak), (3, 3));

    let three_days_later = fixed_today().checked_add_days(Days::new(3)).unwrap();
    let views = list_habits(
        projections.as_ref(),
        "user-fixed-0001",
        three_days_later,
        Paging::default(),
    )
    .await
    .unwrap();
    assert_eq!((views[0].current_streak, views[0].max_streak), (0, 3));
    assert!(!views[0].completed_today);
}
