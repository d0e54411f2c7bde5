//! 预导入模块，方便使用

pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::file_submissions::{
    ActiveModel as FileSubmissionActiveModel, Entity as FileSubmissions,
    Model as FileSubmissionModel,
};
pub use super::requirements::{
    ActiveModel as RequirementActiveModel, Entity as Requirements, Model as RequirementModel,
};
pub use super::submission_requirements::{
    ActiveModel as SubmissionRequirementActiveModel, Entity as SubmissionRequirements,
    Model as SubmissionRequirementModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::user_profiles::{
    ActiveModel as UserProfileActiveModel, Entity as UserProfiles, Model as UserProfileModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::work_categories::{
    ActiveModel as WorkCategoryActiveModel, Entity as WorkCategories, Model as WorkCategoryModel,
};
