//! Fetches the three board resources and joins them by role.

use std::fmt::Display;

use futures::try_join;
use tracing::debug;

use super::{
    api::{BoardConfiguration, IssuePage, JiraBoard},
    client::BoardClient,
    query::issue_query,
};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Board,
    Configuration,
    Issues,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Board => write!(f, "board"),
            Role::Configuration => write!(f, "configuration"),
            Role::Issues => write!(f, "issues"),
        }
    }
}

/// The outcome of one concurrent branch, tagged with the role it fills.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleResult {
    Board(JiraBoard),
    Configuration(BoardConfiguration),
    Issues(IssuePage),
}

impl RoleResult {
    pub fn role(&self) -> Role {
        match self {
            RoleResult::Board(_) => Role::Board,
            RoleResult::Configuration(_) => Role::Configuration,
            RoleResult::Issues(_) => Role::Issues,
        }
    }
}

/// Everything the transformer needs, one value per role.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardResults {
    pub board: JiraBoard,
    pub configuration: BoardConfiguration,
    pub issues: IssuePage,
}

impl BoardResults {
    /// Keeps the first result seen for each role.
    pub fn join(results: impl IntoIterator<Item = RoleResult>) -> Result<Self> {
        let mut board = None;
        let mut configuration = None;
        let mut issues = None;

        for result in results {
            match result {
                RoleResult::Board(data) => {
                    board.get_or_insert(data);
                }
                RoleResult::Configuration(data) => {
                    configuration.get_or_insert(data);
                }
                RoleResult::Issues(data) => {
                    issues.get_or_insert(data);
                }
            }
        }

        Ok(Self {
            board: board.ok_or(Error::MissingRole(Role::Board))?,
            configuration: configuration.ok_or(Error::MissingRole(Role::Configuration))?,
            issues: issues.ok_or(Error::MissingRole(Role::Issues))?,
        })
    }
}

/// Fetches the configuration, then the board metadata and issue list concurrently.
///
/// The first failing branch aborts the whole aggregation.
pub async fn fetch_board_results(client: &BoardClient) -> Result<BoardResults> {
    let configuration: BoardConfiguration = client.get_json("/configuration").await?;
    let query = issue_query(&configuration);

    let board = async { Ok::<_, Error>(RoleResult::Board(client.get_json("/").await?)) };
    let forwarded = async { Ok::<_, Error>(RoleResult::Configuration(configuration)) };
    let issues = async { Ok::<_, Error>(RoleResult::Issues(client.get_json(&query).await?)) };

    let (board, configuration, issues) = try_join!(board, forwarded, issues)?;
    debug!(
        "Joined {}, {} and {} for {}",
        board.role(),
        configuration.role(),
        issues.role(),
        client.base_url()
    );
    BoardResults::join([board, configuration, issues])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jira::api::ColumnConfig;

    fn board(name: &str) -> RoleResult {
        RoleResult::Board(JiraBoard {
            name: name.to_string(),
        })
    }

    fn configuration() -> RoleResult {
        RoleResult::Configuration(BoardConfiguration {
            column_config: ColumnConfig { columns: vec![] },
            sub_query: None,
        })
    }

    fn issues() -> RoleResult {
        RoleResult::Issues(IssuePage { issues: vec![] })
    }

    #[test]
    fn join_is_order_independent() -> Result<()> {
        let joined = BoardResults::join([issues(), board("Sprint Board"), configuration()])?;
        assert_eq!(joined.board.name, "Sprint Board");
        assert!(joined.issues.issues.is_empty());
        Ok(())
    }

    #[test]
    fn join_keeps_first_match() -> Result<()> {
        let joined = BoardResults::join([
            board("First"),
            configuration(),
            board("Second"),
            issues(),
        ])?;
        assert_eq!(joined.board.name, "First");
        Ok(())
    }

    #[test]
    fn join_requires_every_role() {
        let err = BoardResults::join([board("Sprint Board"), configuration()]).unwrap_err();
        assert!(matches!(err, Error::MissingRole(Role::Issues)));
    }

    #[test]
    fn role_tags() {
        assert_eq!(board("x").role(), Role::Board);
        assert_eq!(configuration().role(), Role::Configuration);
        assert_eq!(issues().role(), Role::Issues);
        assert_eq!(Role::Configuration.to_string(), "configuration");
    }
}
