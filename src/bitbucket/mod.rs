pub mod bitbucket_client;
pub mod builder;
pub mod handler;
pub mod request;

use crate::{
    error::Result,
    params::{Field, Parameters},
    validation,
};
use bitbucket_client::BitbucketClient;
use serde_json::Value;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}

/// Validates `params` and opens the pull request on `https://<hostname>`.
pub async fn open_pull_request(params: &Parameters) -> Result<Value> {
    validation::validate(params)?;

    let client = BitbucketClient::new(
        value(params, Field::Hostname),
        value(params, Field::ApiKey),
    );

    submit(&client, params).await
}

/// Sends the pull request described by already validated `params`.
pub async fn submit(client: &BitbucketClient, params: &Parameters) -> Result<Value> {
    client
        .repo(
            value(params, Field::ProjectKey),
            value(params, Field::RepositorySlug),
        )
        .pull_requests()
        .create()
        .title(value(params, Field::Title))
        .description(params.get(Field::Description))
        .from_branch(value(params, Field::FromBranch))
        .to_branch(value(params, Field::ToBranch))
        .reviewers(params.get(Field::Reviewers))
        .execute()
        .await
}

fn value(params: &Parameters, field: Field) -> &str {
    params.get(field).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        git::RepositoryMetadata,
        prompt::{editor::Editor, Prompter},
    };
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::io::Cursor;

    const PATH: &str = "/rest/api/1.0/projects/proj/repos/repo/pull-requests";

    fn params(reviewers: Option<&str>) -> Parameters {
        let mut params: Parameters = [
            (Field::Hostname, "git.example.com"),
            (Field::ApiKey, "secret"),
            (Field::ProjectKey, "proj"),
            (Field::RepositorySlug, "repo"),
            (Field::Title, "Add feature"),
            (Field::Description, "Line one\nLine two"),
            (Field::FromBranch, "feature"),
            (Field::ToBranch, "main"),
        ]
        .into_iter()
        .collect();
        params.set_if_absent(Field::Reviewers, reviewers.map(str::to_owned));
        params
    }

    struct NoEditor;

    impl Editor for NoEditor {
        fn edit(&self, _info: &str) -> Result<String> {
            Err(Error::Editor("no terminal".to_owned()))
        }
    }

    fn collect(params: &mut Parameters, input: &str) -> Result<String> {
        let mut output = vec![];
        {
            let mut prompter =
                Prompter::new(Cursor::new(input.as_bytes()), &mut output, NoEditor);
            prompter.collect(params, &RepositoryMetadata::default())?;
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    fn expected_ref(branch: &str) -> serde_json::Value {
        json!({
            "id": format!("refs/heads/{}", branch),
            "repository": { "slug": "repo", "name": null, "project": { "key": "proj" } }
        })
    }

    #[tokio::test]
    async fn should_open_pull_request() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("authorization", "Bearer secret")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "title": "Add feature",
                "description": "Line one\nLine two",
                "state": "OPEN",
                "open": true,
                "closed": false,
                "locked": false,
                "fromRef": expected_ref("feature"),
                "toRef": expected_ref("main"),
                "reviewers": [
                    { "user": { "name": "alice" } },
                    { "user": { "name": "bob" } }
                ]
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":42,"state":"OPEN"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = BitbucketClient::with_base_url(server.url(), "secret");
        let response = submit(&client, &params(Some("Alice,Bob"))).await?;

        mock.assert_async().await;
        assert_eq!(response, json!({ "id": 42, "state": "OPEN" }));
        Ok(())
    }

    #[tokio::test]
    async fn should_send_empty_reviewers_when_none_given() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(Matcher::PartialJson(json!({ "reviewers": [] })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = BitbucketClient::with_base_url(server.url(), "secret");
        submit(&client, &params(None)).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn should_report_server_error_message() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(409)
            .with_body(r#"{"errors":[{"message":"Branch conflict"}]}"#)
            .create_async()
            .await;

        let client = BitbucketClient::with_base_url(server.url(), "secret");
        let err = submit(&client, &params(None)).await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 409, .. }));
        assert_eq!(err.to_string(), "Branch conflict");
        Ok(())
    }

    #[tokio::test]
    async fn should_not_send_invalid_parameters() {
        let mut params = params(None);
        params.set(Field::ToBranch, "");

        let err = open_pull_request(&params).await.unwrap_err();

        match err {
            Error::Validation { missing } => assert_eq!(missing, vec![Field::ToBranch]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_prompt_for_destination_and_post_once() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::PartialJson(json!({
                "fromRef": expected_ref("feature"),
                "toRef": expected_ref("main"),
                "reviewers": [{ "user": { "name": "alice" } }]
            })))
            .with_status(201)
            .with_body(r#"{"id":7}"#)
            .expect(1)
            .create_async()
            .await;
        let mut params = params(Some("Alice"));
        params.set(Field::ToBranch, "");

        let output = collect(&mut params, "main\n")?;
        let client = BitbucketClient::with_base_url(server.url(), "secret");
        let response = submit(&client, &params).await?;

        mock.assert_async().await;
        assert_eq!(output, "[Required] Insert the PR destination branch: ");
        assert_eq!(response, json!({ "id": 7 }));
        Ok(())
    }

    #[tokio::test]
    async fn should_send_no_reviewers_after_empty_list_answer() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(Matcher::PartialJson(json!({ "reviewers": [] })))
            .with_status(201)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;
        let mut params = params(None);

        let output = collect(&mut params, "\n")?;
        let client = BitbucketClient::with_base_url(server.url(), "secret");
        submit(&client, &params).await?;

        mock.assert_async().await;
        assert_eq!(output, "[Optional] Insert the PR reviewers []: ");
        assert!(!params.contains(Field::Reviewers));
        Ok(())
    }
}
