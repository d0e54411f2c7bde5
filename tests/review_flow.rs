//! 存储层集成测试：在内存 SQLite 上走完整的申报-审核流程。

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use rust_worksystem_next::errors::WorkSystemError;
use rust_worksystem_next::models::submissions::entities::{
    ReviewAction, ReviewOutcome, ReviewStage, SubmissionStatus,
};
use rust_worksystem_next::models::submissions::requests::{
    NewSubmission, SubmissionFileEntry, SubmissionListQuery,
};
use rust_worksystem_next::models::users::entities::UserRole;
use rust_worksystem_next::models::users::requests::CreateUserRequest;
use rust_worksystem_next::models::work_categories::requests::{
    CreateWorkCategoryRequest, RequirementPayload, UpdateWorkCategoryRequest,
};
use rust_worksystem_next::storage::Storage;
use rust_worksystem_next::storage::sea_orm_storage::SeaOrmStorage;

async fn setup_storage() -> SeaOrmStorage {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage::from_connection(db)
}

fn user_request(username: &str, role: UserRole) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: format!("{username}@example.edu"),
        password: "argon2-hash-placeholder".to_string(),
        role,
        display_name: None,
        phone_number: None,
        birthdate: None,
        department_id: None,
        department_name: None,
        department_description: None,
    }
}

fn category_request(name: &str) -> CreateWorkCategoryRequest {
    CreateWorkCategoryRequest {
        name: name.to_string(),
        description: Some("Professional development".to_string()),
        max_percentage: 20,
        requirements: vec![
            RequirementPayload {
                name: "Publications".to_string(),
                description: None,
                max_percentage_increase: 10,
            },
            RequirementPayload {
                name: "Committee work".to_string(),
                description: None,
                max_percentage_increase: 5,
            },
        ],
    }
}

/// 创建院系管理员（连带院系）和挂靠该院系的教授，返回 (professor_id, department_id)
async fn seed_professor(storage: &SeaOrmStorage, tag: &str) -> (i64, i64) {
    let mut admin = user_request(&format!("admin{tag}"), UserRole::DepartmentAdmin);
    admin.department_name = Some(format!("Dept {tag}"));
    let admin = storage.create_user(admin).await.expect("create dept admin");
    let department_id = admin.profile.department_id.expect("admin has department");

    let mut prof = user_request(&format!("prof{tag}"), UserRole::Professor);
    prof.department_id = Some(department_id);
    let prof = storage.create_user(prof).await.expect("create professor");

    (prof.user.id, department_id)
}

fn file_entry(requirement_id: i64, name: &str) -> SubmissionFileEntry {
    SubmissionFileEntry {
        requirement_id,
        original_name: format!("{name}.pdf"),
        stored_name: format!("123-{name}.bin"),
    }
}

#[tokio::test]
async fn department_admin_creation_creates_department() {
    let storage = setup_storage().await;

    let mut req = user_request("deptadmin1", UserRole::DepartmentAdmin);
    req.department_name = Some("Mathematics".to_string());
    let created = storage.create_user(req).await.unwrap();

    let departments = storage.list_departments().await.unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Mathematics");
    assert_eq!(departments[0].admin_id, Some(created.user.id));
    assert_eq!(created.profile.department_id, Some(departments[0].id));
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let storage = setup_storage().await;

    storage
        .create_user(user_request("superadmin1", UserRole::SuperAdmin))
        .await
        .unwrap();
    let err = storage
        .create_user(user_request("superadmin1", UserRole::SuperAdmin))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkSystemError::Conflict(_)));

    // 失败的第二次创建不留下任何残余
    assert_eq!(storage.count_users().await.unwrap(), 1);
    let kept = storage
        .get_user_by_username("superadmin1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.email, "superadmin1@example.edu");
}

#[tokio::test]
async fn professor_requires_existing_department() {
    let storage = setup_storage().await;

    let mut req = user_request("prof1", UserRole::Professor);
    req.department_id = Some(4242);
    let err = storage.create_user(req).await.unwrap_err();
    assert!(matches!(err, WorkSystemError::NotFound(_)));

    let missing = user_request("prof2", UserRole::Professor);
    let err = storage.create_user(missing).await.unwrap_err();
    assert!(matches!(err, WorkSystemError::Validation(_)));
}

#[tokio::test]
async fn category_create_returns_nested_requirements() {
    let storage = setup_storage().await;

    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    assert_eq!(category.requirements.len(), 2);
    assert!(
        category
            .requirements
            .iter()
            .all(|r| r.work_category_id == category.id)
    );

    let err = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkSystemError::Conflict(_)));
}

#[tokio::test]
async fn category_edit_rewrites_requirement_set() {
    let storage = setup_storage().await;

    let category = storage
        .create_work_category(category_request("Research"))
        .await
        .unwrap();

    let updated = storage
        .update_work_category(
            category.id,
            UpdateWorkCategoryRequest {
                name: "Research & Grants".to_string(),
                description: None,
                max_percentage: 30,
                requirements: vec![RequirementPayload {
                    name: "Grant acquisition".to_string(),
                    description: None,
                    max_percentage_increase: 15,
                }],
            },
        )
        .await
        .unwrap()
        .expect("category exists");

    assert_eq!(updated.name, "Research & Grants");
    assert_eq!(updated.requirements.len(), 1);
    assert_eq!(updated.requirements[0].name, "Grant acquisition");

    // 旧要求已被整体替换
    let reloaded = storage
        .get_work_category_by_id(category.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.requirements.len(), 1);

    let missing = storage
        .update_work_category(
            9999,
            UpdateWorkCategoryRequest {
                name: "Ghost".to_string(),
                description: None,
                max_percentage: 10,
                requirements: vec![RequirementPayload {
                    name: "Anything".to_string(),
                    description: None,
                    max_percentage_increase: 5,
                }],
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn lenient_submission_skips_invalid_requirement_keys() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "a").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    let submission = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: category.id,
                submission_description: Some("Course portfolio".to_string()),
                files: vec![file_entry(r1, "portfolio"), file_entry(999, "stray")],
            },
            false,
        )
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Processing);
    assert_eq!(submission.fulfilled_requirement_ids, vec![r1]);
    assert_eq!(submission.files.len(), 1);
    assert_eq!(submission.files[0].requirement_id, r1);
}

#[tokio::test]
async fn lenient_submission_with_only_invalid_keys_is_created_empty() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "aa").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();

    // 全部键无效：宽松模式只跳过，不拒绝整个提交
    let submission = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: category.id,
                submission_description: None,
                files: vec![file_entry(999, "stray")],
            },
            false,
        )
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Processing);
    assert!(submission.fulfilled_requirement_ids.is_empty());
    assert!(submission.files.is_empty());
}

#[tokio::test]
async fn strict_submission_rejects_invalid_requirement_keys() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "b").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    let err = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: category.id,
                submission_description: None,
                files: vec![file_entry(r1, "portfolio"), file_entry(999, "stray")],
            },
            true,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkSystemError::Validation(_)));

    // 拒绝的提交不留下任何行
    let listed = storage
        .list_submissions(SubmissionListQuery::default())
        .await
        .unwrap();
    assert!(listed.items.is_empty());
}

#[tokio::test]
async fn submission_to_unknown_category_is_not_found() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "c").await;

    let err = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: 777,
                submission_description: None,
                files: vec![file_entry(1, "whatever")],
            },
            false,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkSystemError::NotFound(_)));
}

#[tokio::test]
async fn review_pipeline_happy_path() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "d").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    let submission = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: category.id,
                submission_description: None,
                files: vec![file_entry(r1, "proof")],
            },
            false,
        )
        .await
        .unwrap();

    let outcome = storage
        .apply_review_transition(
            submission.id,
            ReviewStage::Department,
            ReviewAction::Approve,
            Some("Checked".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ReviewOutcome::Applied(SubmissionStatus::DepartmentApproved)
    );

    let outcome = storage
        .apply_review_transition(submission.id, ReviewStage::Super, ReviewAction::Approve, None)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ReviewOutcome::Applied(SubmissionStatus::SuperApproved)
    );

    let reloaded = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, SubmissionStatus::SuperApproved);
    assert_eq!(reloaded.action_description.as_deref(), Some("Checked"));
}

#[tokio::test]
async fn review_replay_is_a_noop() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "e").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    let submission = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: category.id,
                submission_description: None,
                files: vec![file_entry(r1, "proof")],
            },
            false,
        )
        .await
        .unwrap();

    storage
        .apply_review_transition(
            submission.id,
            ReviewStage::Department,
            ReviewAction::Approve,
            None,
        )
        .await
        .unwrap();

    // 第二次院系审批命中 0 行，状态保持不变
    let outcome = storage
        .apply_review_transition(
            submission.id,
            ReviewStage::Department,
            ReviewAction::Decline,
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ReviewOutcome::NoOp(SubmissionStatus::DepartmentApproved)
    );
}

#[tokio::test]
async fn super_decline_returns_submission_for_rework() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "f").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    let submission = storage
        .create_submission(
            NewSubmission {
                professor_id,
                work_category_id: category.id,
                submission_description: None,
                files: vec![file_entry(r1, "proof")],
            },
            false,
        )
        .await
        .unwrap();

    storage
        .apply_review_transition(
            submission.id,
            ReviewStage::Department,
            ReviewAction::Approve,
            None,
        )
        .await
        .unwrap();

    let outcome = storage
        .apply_review_transition(
            submission.id,
            ReviewStage::Super,
            ReviewAction::Decline,
            Some("Please attach the signed form".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(outcome, ReviewOutcome::Applied(SubmissionStatus::Processing));

    // 退回后重新走院系审核
    let outcome = storage
        .apply_review_transition(
            submission.id,
            ReviewStage::Department,
            ReviewAction::Approve,
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ReviewOutcome::Applied(SubmissionStatus::DepartmentApproved)
    );
}

#[tokio::test]
async fn review_of_unknown_submission_is_not_found() {
    let storage = setup_storage().await;

    let err = storage
        .apply_review_transition(31337, ReviewStage::Department, ReviewAction::Approve, None)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkSystemError::NotFound(_)));
}

#[tokio::test]
async fn list_views_filter_by_status_and_professor() {
    let storage = setup_storage().await;
    let (prof_a, _) = seed_professor(&storage, "g").await;
    let (prof_b, _) = seed_professor(&storage, "h").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    for professor_id in [prof_a, prof_b] {
        storage
            .create_submission(
                NewSubmission {
                    professor_id,
                    work_category_id: category.id,
                    submission_description: None,
                    files: vec![file_entry(r1, "proof")],
                },
                false,
            )
            .await
            .unwrap();
    }

    // prof_a 的提交进入院系批准状态
    let first_id = storage
        .list_submissions(SubmissionListQuery {
            professor_id: Some(prof_a),
            ..Default::default()
        })
        .await
        .unwrap()
        .items[0]
        .id;
    storage
        .apply_review_transition(first_id, ReviewStage::Department, ReviewAction::Approve, None)
        .await
        .unwrap();

    let processing = storage
        .list_submissions(SubmissionListQuery {
            status: Some(SubmissionStatus::PROCESSING.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(processing.items.len(), 1);
    assert_eq!(processing.items[0].professor.id, prof_b);
    assert_eq!(processing.items[0].work_category_name, "Teaching");
    assert!(!processing.items[0].professor.username.is_empty());

    let approved = storage
        .list_submissions(SubmissionListQuery {
            status: Some(SubmissionStatus::DEPARTMENT_APPROVED.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(approved.items.len(), 1);
    assert_eq!(approved.items[0].id, first_id);

    let mine = storage
        .list_submissions(SubmissionListQuery {
            professor_id: Some(prof_b),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(mine.items.len(), 1);
    assert_eq!(mine.items[0].professor.id, prof_b);
}

#[tokio::test]
async fn my_submissions_are_ordered_newest_first() {
    let storage = setup_storage().await;
    let (professor_id, _) = seed_professor(&storage, "i").await;
    let category = storage
        .create_work_category(category_request("Teaching"))
        .await
        .unwrap();
    let r1 = category.requirements[0].id;

    let mut created_ids = Vec::new();
    for name in ["first", "second", "third"] {
        let submission = storage
            .create_submission(
                NewSubmission {
                    professor_id,
                    work_category_id: category.id,
                    submission_description: Some(name.to_string()),
                    files: vec![file_entry(r1, name)],
                },
                false,
            )
            .await
            .unwrap();
        created_ids.push(submission.id);
    }

    let mine = storage
        .list_submissions(SubmissionListQuery {
            professor_id: Some(professor_id),
            ..Default::default()
        })
        .await
        .unwrap();

    // 最新在前；同一秒内创建的提交按 ID 倒序兜底
    let listed_ids: Vec<i64> = mine.items.iter().map(|item| item.id).collect();
    created_ids.reverse();
    assert_eq!(listed_ids, created_ids);
    assert_eq!(
        mine.items[0].submission_description.as_deref(),
        Some("third")
    );
}
