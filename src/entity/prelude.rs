//! 预导入模块，方便使用

pub use super::answers::{
    ActiveModel as AnswerActiveModel, Entity as Answers, Model as AnswerModel,
};
pub use super::choices::{
    ActiveModel as ChoiceActiveModel, Entity as Choices, Model as ChoiceModel,
};
pub use super::job_applications::{
    ActiveModel as JobApplicationActiveModel, Entity as JobApplications,
    Model as JobApplicationModel,
};
pub use super::jobs::{ActiveModel as JobActiveModel, Entity as Jobs, Model as JobModel};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::tests::{ActiveModel as TestActiveModel, Entity as Tests, Model as TestModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
