use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cafe-admin", version, about = "Manage cafés and their employees")]
pub struct Cli {
    /// Backend base URL, overrides CAFE_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List and edit cafés")]
    Cafes {
        #[command(subcommand)]
        command: CafeCommand,
    },

    #[command(about = "List and edit employees")]
    Employees {
        #[command(subcommand)]
        command: EmployeeCommand,
    },
}

#[derive(Subcommand)]
pub enum CafeCommand {
    #[command(about = "List cafés, most employees first")]
    List {
        #[arg(long)]
        location: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Add a café")]
    Create {
        #[command(flatten)]
        fields: CafeFields,
    },

    #[command(about = "Edit a café; only the given fields change")]
    Update {
        id: String,

        #[command(flatten)]
        fields: CafeFields,
    },

    #[command(about = "Delete a café and all of its employees")]
    Delete {
        id: String,

        #[arg(long, short)]
        yes: bool,
    },

    #[command(about = "Print the employees view target for a café")]
    Link { name: String },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    #[command(about = "List employees, longest-serving first")]
    List {
        /// Café name
        #[arg(long, conflicts_with = "route")]
        cafe: Option<String>,

        /// Navigation target such as /employees?cafe=Cafe%20ABC
        #[arg(long)]
        route: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Show one employee")]
    Show { id: String },

    #[command(about = "Add an employee")]
    Create {
        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    #[command(about = "Edit an employee; only the given fields change")]
    Update {
        id: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    #[command(about = "Delete an employee")]
    Delete {
        id: String,

        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// One-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Default)]
pub struct CafeFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub logo: Option<String>,

    #[arg(long)]
    pub location: Option<String>,
}

impl CafeFields {
    /// `(form field, value)` for every flag that was given
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("logo", &self.logo),
            ("location", &self.location),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Args, Debug, Default)]
pub struct EmployeeFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Male or Female
    #[arg(long)]
    pub gender: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,

    /// Assigned café id; pass an empty value to unassign
    #[arg(long)]
    pub cafe_id: Option<String>,
}

impl EmployeeFields {
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("email_address", &self.email),
            ("phone_number", &self.phone),
            ("gender", &self.gender),
            ("start_date", &self.start_date),
            ("cafe_id", &self.cafe_id),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee_list_with_route() {
        let cli = Cli::parse_from([
            "cafe-admin",
            "employees",
            "list",
            "--route",
            "/employees?cafe=Cafe%20ABC",
        ]);
        match cli.command {
            Commands::Employees {
                command: EmployeeCommand::List { cafe, route, page },
            } => {
                assert!(cafe.is_none());
                assert_eq!(route.as_deref(), Some("/employees?cafe=Cafe%20ABC"));
                assert_eq!(page.page, 1);
            }
            _ => panic!("expected employees list"),
        }
    }

    #[test]
    fn test_cafe_and_route_conflict() {
        let result = Cli::try_parse_from([
            "cafe-admin",
            "employees",
            "list",
            "--cafe",
            "Cafe ABC",
            "--route",
            "/employees",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_only_given_fields_are_assigned() {
        let fields = CafeFields {
            name: Some("Cafe ABC".into()),
            location: Some("Orchard".into()),
            ..Default::default()
        };
        assert_eq!(
            fields.assignments(),
            [("name", "Cafe ABC"), ("location", "Orchard")]
        );

        let fields = EmployeeFields {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert_eq!(fields.assignments(), [("email_address", "a@b.c")]);
    }

    #[test]
    fn test_delete_flag() {
        let cli = Cli::parse_from(["cafe-admin", "cafes", "delete", "abc", "--yes"]);
        assert!(matches!(
            cli.command,
            Commands::Cafes {
                command: CafeCommand::Delete { yes: true, .. }
            }
        ));
    }
}
