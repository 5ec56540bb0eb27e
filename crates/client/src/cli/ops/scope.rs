use clap::Args;

use common::types::BucketSearchPermissionsOptions;

/// Permission filters shared by the listing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Only refresh entries belonging to this bucket
    #[arg(long)]
    pub bucket_id: Option<String>,

    /// Only consider permissions held by this user
    #[arg(long)]
    pub user_id: Option<String>,

    /// Only consider permissions with this code (e.g. READ)
    #[arg(long)]
    pub perm_code: Option<String>,
}

impl ScopeArgs {
    /// The permission query, or `None` when no filter was given
    pub fn options(&self) -> Option<BucketSearchPermissionsOptions> {
        if self.bucket_id.is_none() && self.user_id.is_none() && self.perm_code.is_none() {
            return None;
        }

        Some(BucketSearchPermissionsOptions {
            user_id: self.user_id.clone(),
            bucket_id: self.bucket_id.clone(),
            perm_code: self.perm_code.clone(),
            object_perms: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_means_unscoped() {
        assert!(ScopeArgs::default().options().is_none());
    }

    #[test]
    fn test_filters_carry_over() {
        let args = ScopeArgs {
            bucket_id: Some("B".to_string()),
            perm_code: Some("READ".to_string()),
            ..Default::default()
        };
        let options = args.options().unwrap();

        assert_eq!(options.scope(), Some("B"));
        assert_eq!(options.perm_code.as_deref(), Some("READ"));
        assert!(options.user_id.is_none());
    }
}
