//! Question service: questions of a poll and the answer choices they offer.

use minipoll_domain::answer_choice::{AnswerChoice, NewAnswerChoice};
use minipoll_domain::error::{MiniPollError, NotFoundError};
use minipoll_domain::id::{PollId, QuestionId};
use minipoll_domain::question::{NewQuestion, Question};

use crate::ports::{AnswerChoiceRepository, PollRepository, QuestionRepository};

/// Application service for questions and answer choices.
pub struct QuestionService<Q, A, P> {
    questions: Q,
    answer_choices: A,
    polls: P,
}

impl<Q, A, P> QuestionService<Q, A, P>
where
    Q: QuestionRepository,
    A: AnswerChoiceRepository,
    P: PollRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(questions: Q, answer_choices: A, polls: P) -> Self {
        Self {
            questions,
            answer_choices,
            polls,
        }
    }

    /// Add a question to an existing poll.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::Validation`] when the text is blank,
    /// [`MiniPollError::NotFound`] when the poll does not exist, or a storage
    /// error propagated from the repositories.
    #[tracing::instrument(skip(self, question), fields(poll_id = %question.poll_id))]
    pub async fn create_question(&self, question: NewQuestion) -> Result<Question, MiniPollError> {
        question.validate()?;
        if self.polls.get_by_id(question.poll_id).await?.is_none() {
            return Err(NotFoundError::new("Poll", question.poll_id).into());
        }
        let created = self.questions.create(question).await?;
        tracing::debug!(question_id = %created.id, "question created");
        Ok(created)
    }

    /// Look up a question by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when no question with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_question(&self, id: QuestionId) -> Result<Question, MiniPollError> {
        self.questions
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Question", id).into())
    }

    /// List the questions of a poll in creation order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_questions(&self, poll_id: PollId) -> Result<Vec<Question>, MiniPollError> {
        self.questions.find_by_poll(poll_id).await
    }

    /// Offer a new answer choice on an existing question.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when the question does not exist,
    /// or a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, answer_choice), fields(question_id = %answer_choice.question_id))]
    pub async fn create_answer_choice(
        &self,
        answer_choice: NewAnswerChoice,
    ) -> Result<AnswerChoice, MiniPollError> {
        if self
            .questions
            .get_by_id(answer_choice.question_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::new("Question", answer_choice.question_id).into());
        }
        let created = self.answer_choices.create(answer_choice).await?;
        tracing::debug!(answer_choice_id = %created.id, "answer choice created");
        Ok(created)
    }

    /// List the answer choices of a question in creation order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_answer_choices(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<AnswerChoice>, MiniPollError> {
        self.answer_choices.find_by_question(question_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::UserRepository;
    use crate::services::testing::InMemoryStore;
    use minipoll_domain::error::ValidationError;
    use minipoll_domain::poll::NewPoll;
    use minipoll_domain::user::NewUser;

    type Service = QuestionService<InMemoryStore, InMemoryStore, InMemoryStore>;

    async fn setup() -> (Service, PollId) {
        let store = InMemoryStore::default();
        let author = UserRepository::create(&store, NewUser::new("alice"))
            .await
            .unwrap();
        let poll = PollRepository::create(&store, NewPoll::new("Lunch", author.id))
            .await
            .unwrap();
        (
            QuestionService::new(store.clone(), store.clone(), store),
            poll.id,
        )
    }

    #[tokio::test]
    async fn should_create_question_in_existing_poll() {
        let (svc, poll_id) = setup().await;

        let question = svc
            .create_question(NewQuestion::new(poll_id, "Where?"))
            .await
            .unwrap();

        assert_eq!(svc.get_question(question.id).await.unwrap().text, "Where?");
        assert_eq!(svc.list_questions(poll_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_question_with_blank_text() {
        let (svc, poll_id) = setup().await;

        let result = svc.create_question(NewQuestion::new(poll_id, "")).await;

        assert!(matches!(
            result,
            Err(MiniPollError::Validation(ValidationError::BlankQuestionText))
        ));
        assert!(svc.list_questions(poll_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_question_when_poll_missing() {
        let (svc, _) = setup().await;

        let result = svc
            .create_question(NewQuestion::new(PollId::new(42), "Where?"))
            .await;

        assert!(matches!(result, Err(MiniPollError::NotFound(ref err)) if err.entity == "Poll"));
    }

    #[tokio::test]
    async fn should_list_answer_choices_in_creation_order() {
        let (svc, poll_id) = setup().await;
        let question = svc
            .create_question(NewQuestion::new(poll_id, "Where?"))
            .await
            .unwrap();

        svc.create_answer_choice(NewAnswerChoice::new(question.id, "Pizza"))
            .await
            .unwrap();
        svc.create_answer_choice(NewAnswerChoice::new(question.id, "Sushi"))
            .await
            .unwrap();

        let choices: Vec<String> = svc
            .list_answer_choices(question.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.choice)
            .collect();
        assert_eq!(choices, ["Pizza", "Sushi"]);
    }

    #[tokio::test]
    async fn should_reject_answer_choice_when_question_missing() {
        let (svc, _) = setup().await;

        let result = svc
            .create_answer_choice(NewAnswerChoice::new(QuestionId::new(5), "Pizza"))
            .await;

        assert!(matches!(result, Err(MiniPollError::NotFound(_))));
    }
}
