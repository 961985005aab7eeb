//! In-memory fake implementing every port, shared by the service tests.

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};

use minipoll_domain::answer_choice::{AnswerChoice, NewAnswerChoice};
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{AnswerChoiceId, PollId, QuestionId, ResponseId, UserId};
use minipoll_domain::poll::{NewPoll, Poll};
use minipoll_domain::question::{NewQuestion, Question};
use minipoll_domain::report::{AnswerTally, PollCompletion};
use minipoll_domain::response::{NewResponse, Response};
use minipoll_domain::time::now;
use minipoll_domain::user::{NewUser, User};

use crate::ports::{
    AnswerChoiceRepository, PollRepository, QuestionRepository, ReportStore, ResponseRepository,
    UserRepository,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    polls: Vec<Poll>,
    questions: Vec<Question>,
    answer_choices: Vec<AnswerChoice>,
    responses: Vec<Response>,
}

fn next_id<T>(rows: &[T]) -> i64 {
    i64::try_from(rows.len()).unwrap() + 1
}

/// Clones share the same tables, so one store can back several services.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn response_count(&self) -> usize {
        self.tables.lock().unwrap().responses.len()
    }
}

impl UserRepository for InMemoryStore {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, MiniPollError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let ts = now();
        let user = User {
            id: UserId::new(next_id(&tables.users)),
            user_name: user.user_name,
            created_at: ts,
            updated_at: ts,
        };
        tables.users.push(user.clone());
        async move { Ok(user) }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.users.iter().find(|u| u.id == id).cloned();
        async move { Ok(result) }
    }

    fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> impl Future<Output = Result<Option<User>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables
            .users
            .iter()
            .find(|u| u.user_name == user_name)
            .cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.users.clone();
        async move { Ok(result) }
    }
}

impl PollRepository for InMemoryStore {
    fn create(&self, poll: NewPoll) -> impl Future<Output = Result<Poll, MiniPollError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let ts = now();
        let poll = Poll {
            id: PollId::new(next_id(&tables.polls)),
            title: poll.title,
            author_id: poll.author_id,
            created_at: ts,
            updated_at: ts,
        };
        tables.polls.push(poll.clone());
        async move { Ok(poll) }
    }

    fn get_by_id(
        &self,
        id: PollId,
    ) -> impl Future<Output = Result<Option<Poll>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.polls.iter().find(|p| p.id == id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Poll>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.polls.clone();
        async move { Ok(result) }
    }
}

impl QuestionRepository for InMemoryStore {
    fn create(
        &self,
        question: NewQuestion,
    ) -> impl Future<Output = Result<Question, MiniPollError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let ts = now();
        let question = Question {
            id: QuestionId::new(next_id(&tables.questions)),
            poll_id: question.poll_id,
            text: question.text,
            created_at: ts,
            updated_at: ts,
        };
        tables.questions.push(question.clone());
        async move { Ok(question) }
    }

    fn get_by_id(
        &self,
        id: QuestionId,
    ) -> impl Future<Output = Result<Option<Question>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.questions.iter().find(|q| q.id == id).cloned();
        async move { Ok(result) }
    }

    fn find_by_poll(
        &self,
        poll_id: PollId,
    ) -> impl Future<Output = Result<Vec<Question>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Question> = tables
            .questions
            .iter()
            .filter(|q| q.poll_id == poll_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
}

impl AnswerChoiceRepository for InMemoryStore {
    fn create(
        &self,
        answer_choice: NewAnswerChoice,
    ) -> impl Future<Output = Result<AnswerChoice, MiniPollError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let ts = now();
        let answer_choice = AnswerChoice {
            id: AnswerChoiceId::new(next_id(&tables.answer_choices)),
            question_id: answer_choice.question_id,
            choice: answer_choice.choice,
            created_at: ts,
            updated_at: ts,
        };
        tables.answer_choices.push(answer_choice.clone());
        async move { Ok(answer_choice) }
    }

    fn get_by_id(
        &self,
        id: AnswerChoiceId,
    ) -> impl Future<Output = Result<Option<AnswerChoice>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.answer_choices.iter().find(|a| a.id == id).cloned();
        async move { Ok(result) }
    }

    fn find_by_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<AnswerChoice>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<AnswerChoice> = tables
            .answer_choices
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
}

impl ResponseRepository for InMemoryStore {
    fn create(
        &self,
        response: NewResponse,
    ) -> impl Future<Output = Result<Response, MiniPollError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let ts = now();
        let response = Response {
            id: ResponseId::new(next_id(&tables.responses)),
            answer_choice_id: response.answer_choice_id,
            respondent_id: response.respondent_id,
            created_at: ts,
            updated_at: ts,
        };
        tables.responses.push(response.clone());
        async move { Ok(response) }
    }

    fn find_by_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<Response>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let choices: HashSet<AnswerChoiceId> = tables
            .answer_choices
            .iter()
            .filter(|a| a.question_id == question_id)
            .map(|a| a.id)
            .collect();
        let result: Vec<Response> = tables
            .responses
            .iter()
            .filter(|r| choices.contains(&r.answer_choice_id))
            .cloned()
            .collect();
        async move { Ok(result) }
    }

    fn find_by_respondent(
        &self,
        respondent_id: UserId,
    ) -> impl Future<Output = Result<Vec<Response>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Response> = tables
            .responses
            .iter()
            .filter(|r| r.respondent_id == respondent_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
}

impl ReportStore for InMemoryStore {
    fn question_results(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<AnswerTally>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<AnswerTally> = tables
            .answer_choices
            .iter()
            .filter(|a| a.question_id == question_id)
            .map(|a| AnswerTally {
                answer_choice: a.clone(),
                count: tables
                    .responses
                    .iter()
                    .filter(|r| r.answer_choice_id == a.id)
                    .count() as u64,
            })
            .collect();
        async move { Ok(result) }
    }

    fn poll_completions(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<PollCompletion>, MiniPollError>> + Send {
        let tables = self.tables.lock().unwrap();
        let mut result = Vec::new();
        for poll in &tables.polls {
            let mut questions = HashSet::new();
            let mut responses_count = 0;
            for question in tables.questions.iter().filter(|q| q.poll_id == poll.id) {
                for choice in tables
                    .answer_choices
                    .iter()
                    .filter(|a| a.question_id == question.id)
                {
                    questions.insert(question.id);
                    responses_count += tables
                        .responses
                        .iter()
                        .filter(|r| r.answer_choice_id == choice.id && r.respondent_id == user_id)
                        .count() as u64;
                }
            }
            if !questions.is_empty() {
                result.push(PollCompletion {
                    poll: poll.clone(),
                    questions_count: questions.len() as u64,
                    responses_count,
                });
            }
        }
        async move { Ok(result) }
    }
}
