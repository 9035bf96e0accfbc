use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 申请状态
//
// 状态机：submitted -> under_review -> written_test | interview
//        -> accepted | rejected
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    WrittenTest,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// 校验状态转移是否合法
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, next),
            (Submitted, UnderReview)
                | (UnderReview, WrittenTest)
                | (UnderReview, Interview)
                | (UnderReview, Rejected)
                | (WrittenTest, Interview)
                | (WrittenTest, Accepted)
                | (WrittenTest, Rejected)
                | (Interview, Accepted)
                | (Interview, Rejected)
        )
    }

    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ApplicationStatus>()
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::WrittenTest => "written_test",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ApplicationStatus::Submitted),
            "under_review" => Ok(ApplicationStatus::UnderReview),
            "written_test" => Ok(ApplicationStatus::WrittenTest),
            "interview" => Ok(ApplicationStatus::Interview),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!(
                "Invalid application status: '{s}'. Supported statuses: submitted, \
                 under_review, written_test, interview, accepted, rejected"
            )),
        }
    }
}

// 求职申请实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct JobApplication {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: ApplicationStatus,
    // 笔试结果指针，提交评分时在同一事务内写入
    pub submission_id: Option<i64>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for s in [
            "submitted",
            "under_review",
            "written_test",
            "interview",
            "accepted",
            "rejected",
        ] {
            assert_eq!(ApplicationStatus::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_legal_transitions() {
        use ApplicationStatus::*;
        assert!(Submitted.can_transition_to(UnderReview));
        assert!(UnderReview.can_transition_to(WrittenTest));
        assert!(UnderReview.can_transition_to(Interview));
        assert!(WrittenTest.can_transition_to(Accepted));
        assert!(Interview.can_transition_to(Rejected));
    }

    #[test]
    fn test_illegal_transitions() {
        use ApplicationStatus::*;
        assert!(!Submitted.can_transition_to(Accepted));
        assert!(!Accepted.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(UnderReview));
        assert!(!WrittenTest.can_transition_to(Submitted));
    }

    #[test]
    fn test_terminal_states() {
        assert!(ApplicationStatus::Accepted.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::UnderReview.is_terminal());
    }
}
