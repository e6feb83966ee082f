use serde::Deserialize;

use crate::api::GitHubClient;
use crate::Result;

#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    name: String,
}

impl Repository {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl GitHubClient {
    /// Names of every repository in the organization, in the order Github
    /// lists them. Only the first page is read.
    pub async fn list_repositories(&self) -> Result<Vec<String>> {
        let endpoint = format!("/orgs/{}/repos", self.organization());
        let repos: Vec<Repository> = self.get_list(&endpoint).await?;
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use mockito::Server;

    fn client(base_url: &str) -> GitHubClient {
        GitHubClient::from_parts(base_url, "acme", Some("octocat"), Some("hunter2"), None).unwrap()
    }

    #[tokio::test]
    async fn test_list_repositories_preserves_order() {
        let mut server = Server::new_async().await;

        let repos_json = r#"[
            {"id": 3, "name": "zeta", "private": false},
            {"id": 1, "name": "alpha", "private": true},
            {"id": 2, "name": "mu", "private": false}
        ]"#;

        let mock = server
            .mock("GET", "/orgs/acme/repos")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(repos_json)
            .create_async()
            .await;

        let names = client(&server.url()).list_repositories().await.unwrap();

        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_repositories_empty_organization() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/orgs/acme/repos")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let names = client(&server.url()).list_repositories().await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_list_repositories_unknown_organization() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/orgs/acme/repos")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let err = client(&server.url()).list_repositories().await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus(404)));
    }

    #[tokio::test]
    async fn test_list_repositories_requires_name_field() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/orgs/acme/repos")
            .with_status(200)
            .with_body(r#"[{"id": 1}]"#)
            .create_async()
            .await;

        let err = client(&server.url()).list_repositories().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
