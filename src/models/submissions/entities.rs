use serde::{Deserialize, Serialize};

/// 提交状态
///
/// 状态管道：PROCESSING → DEPARTMENT_APPROVED → SUPER_APPROVED，
/// 以及院系级驳回 PROCESSING → DENIED。DENIED 与 SUPER_APPROVED 为
/// 吸收态，任何动作都不再改变状态。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Processing,
    DepartmentApproved,
    SuperApproved,
    Denied,
}

/// 审核级别（两道顺序关卡）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStage {
    Department,
    Super,
}

/// 审核动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Decline,
}

impl SubmissionStatus {
    pub const PROCESSING: &'static str = "processing";
    pub const DEPARTMENT_APPROVED: &'static str = "department_approved";
    pub const SUPER_APPROVED: &'static str = "super_approved";
    pub const DENIED: &'static str = "denied";

    /// 某一审核级别动作所要求的当前状态
    ///
    /// 乐观 CAS 更新时作为 WHERE 条件，当前状态不符则整个动作
    /// 自然落空（防止重复点击导致的二次变更）。
    pub fn expected_source(stage: ReviewStage) -> SubmissionStatus {
        match stage {
            ReviewStage::Department => SubmissionStatus::Processing,
            ReviewStage::Super => SubmissionStatus::DepartmentApproved,
        }
    }

    /// 计算一次审核动作的目标状态
    ///
    /// 返回 `None` 表示当前状态不是该级别动作的合法起点，调用方
    /// 应将其视为静默 no-op 而非错误。
    pub fn transition(self, stage: ReviewStage, action: ReviewAction) -> Option<SubmissionStatus> {
        if self != Self::expected_source(stage) {
            return None;
        }
        let next = match (stage, action) {
            (ReviewStage::Department, ReviewAction::Approve) => SubmissionStatus::DepartmentApproved,
            (ReviewStage::Department, ReviewAction::Decline) => SubmissionStatus::Denied,
            (ReviewStage::Super, ReviewAction::Approve) => SubmissionStatus::SuperApproved,
            // 终审驳回：退回重做，而不是拒绝
            (ReviewStage::Super, ReviewAction::Decline) => SubmissionStatus::Processing,
        };
        Some(next)
    }

    /// 是否为吸收态
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionStatus::Denied | SubmissionStatus::SuperApproved
        )
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Processing => write!(f, "{}", Self::PROCESSING),
            SubmissionStatus::DepartmentApproved => write!(f, "{}", Self::DEPARTMENT_APPROVED),
            SubmissionStatus::SuperApproved => write!(f, "{}", Self::SUPER_APPROVED),
            SubmissionStatus::Denied => write!(f, "{}", Self::DENIED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(SubmissionStatus::Processing),
            "department_approved" => Ok(SubmissionStatus::DepartmentApproved),
            "super_approved" => Ok(SubmissionStatus::SuperApproved),
            "denied" => Ok(SubmissionStatus::Denied),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 提交（聚合根）：教授对某工作类别的一次申报
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: i64,
    pub professor_id: i64,
    pub work_category_id: i64,
    pub status: SubmissionStatus,
    pub submission_description: Option<String>,
    /// 审核人备注
    pub action_description: Option<String>,
    /// 本次提交声称满足的要求（类别要求的子集）
    pub fulfilled_requirement_ids: Vec<i64>,
    pub files: Vec<FileSubmission>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 提交文件：某一要求对应的一份证明文件
#[derive(Debug, Clone, Serialize)]
pub struct FileSubmission {
    pub id: i64,
    pub submission_id: i64,
    pub requirement_id: i64,
    pub original_name: String,
    pub stored_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 一次审核动作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// 状态已按管道推进
    Applied(SubmissionStatus),
    /// 前置状态不满足，未做任何变更（携带当前状态）
    NoOp(SubmissionStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_approve() {
        assert_eq!(
            SubmissionStatus::Processing
                .transition(ReviewStage::Department, ReviewAction::Approve),
            Some(SubmissionStatus::DepartmentApproved)
        );
    }

    #[test]
    fn test_department_decline_is_terminal_denial() {
        let next = SubmissionStatus::Processing
            .transition(ReviewStage::Department, ReviewAction::Decline)
            .unwrap();
        assert_eq!(next, SubmissionStatus::Denied);
        assert!(next.is_terminal());
    }

    #[test]
    fn test_super_approve() {
        assert_eq!(
            SubmissionStatus::DepartmentApproved
                .transition(ReviewStage::Super, ReviewAction::Approve),
            Some(SubmissionStatus::SuperApproved)
        );
    }

    #[test]
    fn test_super_decline_returns_for_rework() {
        // 终审驳回退回 PROCESSING，而不是 DENIED
        assert_eq!(
            SubmissionStatus::DepartmentApproved
                .transition(ReviewStage::Super, ReviewAction::Decline),
            Some(SubmissionStatus::Processing)
        );
    }

    #[test]
    fn test_replay_is_noop() {
        // 院系审批重放：第二次动作的起点已不是 PROCESSING
        let approved = SubmissionStatus::Processing
            .transition(ReviewStage::Department, ReviewAction::Approve)
            .unwrap();
        assert_eq!(
            approved.transition(ReviewStage::Department, ReviewAction::Approve),
            None
        );
    }

    #[test]
    fn test_terminal_states_absorb_everything() {
        for terminal in [SubmissionStatus::Denied, SubmissionStatus::SuperApproved] {
            for stage in [ReviewStage::Department, ReviewStage::Super] {
                for action in [ReviewAction::Approve, ReviewAction::Decline] {
                    assert_eq!(terminal.transition(stage, action), None);
                }
            }
        }
    }

    #[test]
    fn test_stage_cannot_skip() {
        // 终审不能直接处理 PROCESSING 的提交
        assert_eq!(
            SubmissionStatus::Processing.transition(ReviewStage::Super, ReviewAction::Approve),
            None
        );
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            SubmissionStatus::Processing,
            SubmissionStatus::DepartmentApproved,
            SubmissionStatus::SuperApproved,
            SubmissionStatus::Denied,
        ] {
            assert_eq!(status.to_string().parse::<SubmissionStatus>(), Ok(status));
        }
    }
}
