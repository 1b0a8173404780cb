//! End-to-end integration tests for the Quire CLI
//!
//! Commands run through the CLI command interface against isolated
//! database instances, one per test.

mod common;

use common::*;
use quire_cli::CliError;

// =============================================================================
// HIERARCHY TESTS
// =============================================================================

mod hierarchy {
    use super::*;

    #[tokio::test]
    async fn test_three_level_chain_and_fourth_level_rejected() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;

        let a = ctx.item("alice", &list, "Project", None).await;
        let b = ctx.item("alice", &list, "Milestone", Some(&a)).await;
        let c = ctx.item("alice", &list, "Step", Some(&b)).await;

        let err = add_cmd(&list, "Too deep", Some(&c))
            .execute(&ctx.db, "alice")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "depth_exceeded");
        assert_eq!(ctx.db.items().count_for_list(&list).await.unwrap(), 3);

        let response = show_cmd(&list).execute(&ctx.db, "alice").await.unwrap();
        let roots = &response.data["roots"];
        assert_eq!(roots[0]["id"], a.as_str());
        assert_eq!(roots[0]["level"], 0);
        assert_eq!(roots[0]["children"][0]["level"], 1);
        assert_eq!(roots[0]["children"][0]["children"][0]["id"], c.as_str());
        assert_eq!(roots[0]["children"][0]["children"][0]["level"], 2);
    }

    #[tokio::test]
    async fn test_show_renders_indented_tree() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Home").await;
        let a = ctx.item("alice", &list, "Kitchen", None).await;
        let b = ctx.item("alice", &list, "Dishes", Some(&a)).await;

        let text = show_cmd(&list)
            .execute(&ctx.db, "alice")
            .await
            .unwrap()
            .render(false);
        let expected = format!(
            "Home ({})\n  [ ] Kitchen ({})\n    [ ] Dishes ({})",
            list, a, b
        );
        assert_eq!(text, expected);
    }

    #[tokio::test]
    async fn test_collapsed_item_hides_children_in_text() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Home").await;
        let a = ctx.item("alice", &list, "Kitchen", None).await;
        ctx.item("alice", &list, "Dishes", Some(&a)).await;

        let response = expand_cmd(&a).execute(&ctx.db, "alice").await.unwrap();
        assert_eq!(response.data["expanded"], false);

        let text = show_cmd(&list)
            .execute(&ctx.db, "alice")
            .await
            .unwrap()
            .render(false);
        assert!(text.ends_with(&format!("[ ] Kitchen ({}) +", a)));
        assert!(!text.contains("Dishes"));
    }

    #[tokio::test]
    async fn test_toggle_does_not_cascade() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Home").await;
        let a = ctx.item("alice", &list, "Kitchen", None).await;
        let b = ctx.item("alice", &list, "Dishes", Some(&a)).await;

        let response = toggle_cmd(&a).execute(&ctx.db, "alice").await.unwrap();
        assert_eq!(response.data["completed"], true);

        let child = ctx.db.todos().get_item("alice", &b).await.unwrap();
        assert!(!child.item.completed);
    }
}

// =============================================================================
// DELETE TESTS
// =============================================================================

mod deletion {
    use super::*;

    #[tokio::test]
    async fn test_rm_cascades_through_subtree() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;
        let a = ctx.item("alice", &list, "A", None).await;
        let b = ctx.item("alice", &list, "B", Some(&a)).await;
        ctx.item("alice", &list, "C", Some(&b)).await;
        let other = ctx.item("alice", &list, "Other", None).await;

        let response = rm_cmd(&a).execute(&ctx.db, "alice").await.unwrap();
        assert_eq!(response.data["removed"], 3);
        assert_eq!(response.render(false), "Deleted 3 items (including sub-items)");

        assert_eq!(ctx.db.items().count_for_list(&list).await.unwrap(), 1);
        assert!(ctx.db.items().exists(&other).await.unwrap());
    }

    #[tokio::test]
    async fn test_rm_single_item_message() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;
        let a = ctx.item("alice", &list, "A", None).await;

        let response = rm_cmd(&a).execute(&ctx.db, "alice").await.unwrap();
        assert_eq!(response.render(false), "Item deleted successfully!");
    }

    #[tokio::test]
    async fn test_delete_list_makes_items_not_found() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;
        let a = ctx.item("alice", &list, "A", None).await;
        let b = ctx.item("alice", &list, "B", Some(&a)).await;

        let response = delete_list_cmd(&list)
            .execute(&ctx.db, "alice")
            .await
            .unwrap();
        assert_eq!(response.data["success"], true);
        assert_eq!(response.data["removed"], 2);

        for id in [&a, &b] {
            let err = toggle_cmd(id).execute(&ctx.db, "alice").await.unwrap_err();
            assert_eq!(err.kind(), "not_found");
        }
        let err = show_cmd(&list).execute(&ctx.db, "alice").await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }
}

// =============================================================================
// MOVE TESTS
// =============================================================================

mod moving {
    use super::*;

    #[tokio::test]
    async fn test_mv_carries_subtree_to_new_list() {
        let ctx = TestContext::new().await;
        let work = ctx.list("alice", "Work").await;
        let home = ctx.list("alice", "Home").await;
        let a = ctx.item("alice", &work, "A", None).await;
        let b = ctx.item("alice", &work, "B", Some(&a)).await;
        let c = ctx.item("alice", &work, "C", Some(&b)).await;

        let response = mv_cmd(&a, &home).execute(&ctx.db, "alice").await.unwrap();
        assert_eq!(response.data["moved"], 3);

        assert_eq!(ctx.db.items().count_for_list(&work).await.unwrap(), 0);
        let tree = show_cmd(&home).execute(&ctx.db, "alice").await.unwrap().data;
        assert_eq!(tree["roots"][0]["id"], a.as_str());
        assert_eq!(tree["roots"][0]["children"][0]["id"], b.as_str());
        assert_eq!(tree["roots"][0]["children"][0]["children"][0]["id"], c.as_str());
    }

    #[tokio::test]
    async fn test_mv_nested_item_becomes_root() {
        let ctx = TestContext::new().await;
        let work = ctx.list("alice", "Work").await;
        let home = ctx.list("alice", "Home").await;
        let a = ctx.item("alice", &work, "A", None).await;
        let b = ctx.item("alice", &work, "B", Some(&a)).await;

        mv_cmd(&b, &home).execute(&ctx.db, "alice").await.unwrap();

        let moved = ctx.db.todos().get_item("alice", &b).await.unwrap();
        assert_eq!(moved.item.list_id, home);
        assert_eq!(moved.item.parent_id, None);
        assert_eq!(moved.level, 0);
        assert_eq!(ctx.db.items().count_for_list(&work).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mv_to_same_list_is_rejected() {
        let ctx = TestContext::new().await;
        let work = ctx.list("alice", "Work").await;
        let a = ctx.item("alice", &work, "A", None).await;

        let err = mv_cmd(&a, &work).execute(&ctx.db, "alice").await.unwrap_err();
        assert_eq!(err.kind(), "validation");
    }
}

// =============================================================================
// ERROR CASES
// =============================================================================

mod error_cases {
    use super::*;

    #[tokio::test]
    async fn test_other_users_cannot_touch_a_list() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Private").await;
        let a = ctx.item("alice", &list, "Secret", None).await;
        let bob_list = ctx.list("bob", "Bob's").await;

        let err = add_cmd(&list, "Intrusion", None)
            .execute(&ctx.db, "bob")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "authorization");

        let err = toggle_cmd(&a).execute(&ctx.db, "bob").await.unwrap_err();
        assert_eq!(err.kind(), "authorization");

        let err = rm_cmd(&a).execute(&ctx.db, "bob").await.unwrap_err();
        assert_eq!(err.kind(), "authorization");

        let err = mv_cmd(&a, &bob_list).execute(&ctx.db, "bob").await.unwrap_err();
        assert_eq!(err.kind(), "authorization");

        let err = delete_list_cmd(&list)
            .execute(&ctx.db, "bob")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "authorization");

        assert_eq!(ctx.db.items().count_for_list(&list).await.unwrap(), 1);
        assert!(ctx.db.lists().exists(&list).await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_title_is_validation_error() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;

        let err = add_cmd(&list, "   ", None)
            .execute(&ctx.db, "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Db(_)));
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.to_string(), "Title is required.");
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;

        let err = add_cmd("zzzzzz", "Orphan", None)
            .execute(&ctx.db, "alice")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "not_found");

        let err = add_cmd(&list, "Orphan", Some("zzzzzz"))
            .execute(&ctx.db, "alice")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "not_found");

        let err = rm_cmd("zzzzzz").execute(&ctx.db, "alice").await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn test_ids_are_case_insensitive() {
        let ctx = TestContext::new().await;
        let list = ctx.list("alice", "Work").await;
        let a = ctx.item("alice", &list, "A", None).await;

        let response = toggle_cmd(&a.to_uppercase())
            .execute(&ctx.db, "alice")
            .await
            .unwrap();
        assert_eq!(response.data["id"], a.as_str());
    }
}
