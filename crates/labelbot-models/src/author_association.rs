/// Relation between a user and a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorAssociation {
    Owner,
    Member,
    Collaborator,
    Contributor,
    FirstTimeContributor,
    FirstTimer,
    Mannequin,
    #[default]
    None,
}

impl AuthorAssociation {
    /// Owners and organization members.
    pub fn is_trusted(self) -> bool {
        matches!(self, Self::Owner | Self::Member)
    }

    /// Users who already contributed to the repository without being members.
    pub fn is_contributor(self) -> bool {
        matches!(self, Self::Contributor | Self::FirstTimeContributor)
    }
}
