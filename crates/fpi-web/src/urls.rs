//! Named routes and their reversal into paths.

use thiserror::Error;

/// Path parameter placeholder used in route patterns.
const ID_PARAM: &str = ":id";

/// No path could be built for a route name and its arguments.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no reverse match for route '{name}'")]
pub struct NoReverseMatch {
    pub name: String,
}

/// Every named page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Index,
    About,
    ConstraintsView,
    ConstraintDetail,
    ConstraintNew,
    ConstraintsUpdate,
    ConstraintDelete,
}

impl RouteName {
    pub const ALL: [RouteName; 7] = [
        RouteName::Index,
        RouteName::About,
        RouteName::ConstraintsView,
        RouteName::ConstraintDetail,
        RouteName::ConstraintNew,
        RouteName::ConstraintsUpdate,
        RouteName::ConstraintDelete,
    ];

    /// The route's name.
    pub fn name(self) -> &'static str {
        match self {
            RouteName::Index => "index",
            RouteName::About => "about",
            RouteName::ConstraintsView => "constraints_view",
            RouteName::ConstraintDetail => "constraint_detail",
            RouteName::ConstraintNew => "constraint_new",
            RouteName::ConstraintsUpdate => "constraints_update",
            RouteName::ConstraintDelete => "constraint_delete",
        }
    }

    /// The router pattern for this route.
    pub fn pattern(self) -> &'static str {
        match self {
            RouteName::Index => "/fpiweb/",
            RouteName::About => "/fpiweb/about/",
            RouteName::ConstraintsView => "/fpiweb/constraints/",
            RouteName::ConstraintDetail => "/fpiweb/constraint/:id/",
            RouteName::ConstraintNew => "/fpiweb/constraints/new/",
            RouteName::ConstraintsUpdate => "/fpiweb/constraint/:id/edit/",
            RouteName::ConstraintDelete => "/fpiweb/constraint/:id/delete/",
        }
    }

    /// Whether the pattern takes a record identifier.
    pub fn takes_id(self) -> bool {
        self.pattern().contains(ID_PARAM)
    }

    /// Look up a route by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// Build the path for a route. Routes with an identifier parameter need `id`;
/// routes without one must not be given it.
pub fn reverse(route: RouteName, id: Option<u64>) -> Result<String, NoReverseMatch> {
    match (route.takes_id(), id) {
        (true, Some(id)) => Ok(route.pattern().replace(ID_PARAM, &id.to_string())),
        (false, None) => Ok(route.pattern().to_string()),
        _ => Err(NoReverseMatch {
            name: route.name().to_string(),
        }),
    }
}

/// The route whose pattern matches `path`, if any.
pub fn resolve(path: &str) -> Option<RouteName> {
    RouteName::ALL
        .into_iter()
        .find(|route| matches_pattern(route.pattern(), path))
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    let mut expected = pattern.split('/');
    let mut actual = path.split('/');
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(ID_PARAM), Some(segment)) if !segment.is_empty() => {}
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}
