use super::SeaOrmStorage;
use crate::entity::prelude::{Departments, Users};
use crate::entity::{departments, user_profiles, users};
use crate::errors::{Result, WorkSystemError};
use crate::models::{
    departments::entities::Department,
    users::{
        entities::{User, UserRole, UserStatus},
        requests::CreateUserRequest,
        responses::UserResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户（用户 + 档案 + 可选院系，单事务）
    ///
    /// 院系管理员随用户一并创建其管理的院系；教授必须挂靠在
    /// 已存在的院系下。任何一步失败整个事务回滚。
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<UserResponse> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            WorkSystemError::database_operation(format!("开启用户创建事务失败: {e}"))
        })?;

        // 显式冲突检查，而不是依赖约束冲突后吞掉错误
        let existing = Users::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(req.username.as_str()))
                    .add(users::Column::Email.eq(req.email.as_str())),
            )
            .one(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询用户失败: {e}")))?;
        if existing.is_some() {
            return Err(WorkSystemError::conflict(
                "Username or email is already taken",
            ));
        }

        // 教授必须挂靠已有院系
        let department_id = match req.role {
            UserRole::Professor => {
                let dept_id = req.department_id.ok_or_else(|| {
                    WorkSystemError::validation("A professor requires a department_id")
                })?;
                Departments::find_by_id(dept_id)
                    .one(&txn)
                    .await
                    .map_err(|e| {
                        WorkSystemError::database_operation(format!("查询院系失败: {e}"))
                    })?
                    .ok_or_else(|| {
                        WorkSystemError::not_found(format!("Department {dept_id} does not exist"))
                    })?;
                Some(dept_id)
            }
            UserRole::DepartmentAdmin | UserRole::SuperAdmin => None,
        };

        let user_model = users::ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = user_model
            .insert(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("创建用户失败: {e}")))?;

        // 院系管理员：创建其管理的院系
        let department_id = if req.role == UserRole::DepartmentAdmin {
            let name = req.department_name.ok_or_else(|| {
                WorkSystemError::validation("A department admin requires a department_name")
            })?;
            let dup = Departments::find()
                .filter(departments::Column::Name.eq(name.as_str()))
                .one(&txn)
                .await
                .map_err(|e| WorkSystemError::database_operation(format!("查询院系失败: {e}")))?;
            if dup.is_some() {
                return Err(WorkSystemError::conflict(format!(
                    "Department '{name}' already exists"
                )));
            }
            let dept = departments::ActiveModel {
                name: Set(name),
                description: Set(req.department_description),
                admin_id: Set(Some(user.id)),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("创建院系失败: {e}")))?;
            Some(dept.id)
        } else {
            department_id
        };

        let profile = user_profiles::ActiveModel {
            user_id: Set(user.id),
            phone_number: Set(req.phone_number),
            birthdate: Set(req.birthdate),
            department_id: Set(department_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| WorkSystemError::database_operation(format!("创建用户档案失败: {e}")))?;

        txn.commit().await.map_err(|e| {
            WorkSystemError::database_operation(format!("提交用户创建事务失败: {e}"))
        })?;

        Ok(UserResponse {
            user: user.into_user(),
            profile: profile.into_profile(),
        })
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }

    /// 列出全部院系
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let rows = Departments::find()
            .order_by_asc(departments::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_department()).collect())
    }
}
