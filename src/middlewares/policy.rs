//! 集中式访问策略
//!
//! 所有路由级权限判断收敛到一张 (角色, 动作) 表，
//! 而不是散落在各处理程序里的角色判断。

use crate::models::users::entities::UserRole;

/// 受保护的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 管理工作类别目录（创建/编辑）
    ManageCatalog,
    /// 浏览工作类别目录
    ViewCatalog,
    /// 提交工作证明
    CreateSubmission,
    /// 查看自己的提交
    ViewOwnSubmissions,
    /// 查看全部提交（审核视图）
    ViewAllSubmissions,
    /// 院系级审核
    ReviewDepartment,
    /// 终审
    ReviewSuper,
    /// 下载提交的文件包
    DownloadBundle,
    /// 创建用户、查看院系
    ManageUsers,
}

pub struct AccessPolicy;

impl AccessPolicy {
    /// 判断某角色是否允许执行某动作
    pub fn allows(role: &UserRole, action: Action) -> bool {
        use Action::*;
        use UserRole::*;
        match action {
            ViewCatalog => true,
            CreateSubmission | ViewOwnSubmissions => matches!(role, Professor),
            ManageCatalog | ManageUsers | ReviewSuper => matches!(role, SuperAdmin),
            ReviewDepartment => matches!(role, DepartmentAdmin),
            ViewAllSubmissions | DownloadBundle => matches!(role, DepartmentAdmin | SuperAdmin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_scope() {
        let role = UserRole::Professor;
        assert!(AccessPolicy::allows(&role, Action::CreateSubmission));
        assert!(AccessPolicy::allows(&role, Action::ViewOwnSubmissions));
        assert!(AccessPolicy::allows(&role, Action::ViewCatalog));
        assert!(!AccessPolicy::allows(&role, Action::ManageCatalog));
        assert!(!AccessPolicy::allows(&role, Action::ReviewDepartment));
        assert!(!AccessPolicy::allows(&role, Action::DownloadBundle));
    }

    #[test]
    fn test_department_admin_scope() {
        let role = UserRole::DepartmentAdmin;
        assert!(AccessPolicy::allows(&role, Action::ReviewDepartment));
        assert!(AccessPolicy::allows(&role, Action::ViewAllSubmissions));
        assert!(AccessPolicy::allows(&role, Action::DownloadBundle));
        assert!(!AccessPolicy::allows(&role, Action::ReviewSuper));
        assert!(!AccessPolicy::allows(&role, Action::CreateSubmission));
        assert!(!AccessPolicy::allows(&role, Action::ManageUsers));
    }

    #[test]
    fn test_super_admin_scope() {
        let role = UserRole::SuperAdmin;
        assert!(AccessPolicy::allows(&role, Action::ReviewSuper));
        assert!(AccessPolicy::allows(&role, Action::ManageCatalog));
        assert!(AccessPolicy::allows(&role, Action::ManageUsers));
        assert!(AccessPolicy::allows(&role, Action::DownloadBundle));
        // 超级管理员不越级处理院系审核队列
        assert!(!AccessPolicy::allows(&role, Action::ReviewDepartment));
        assert!(!AccessPolicy::allows(&role, Action::CreateSubmission));
    }
}
