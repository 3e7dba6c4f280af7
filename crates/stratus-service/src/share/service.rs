//! Share link lifecycle: minting and revocation.

use std::sync::Arc;

use stratus_auth::guard::OwnershipGuard;
use stratus_core::error::{AppError, ErrorKind};
use stratus_core::result::AppResult;
use stratus_database::repositories::ShareRepository;
use stratus_entity::share::{CreateShareLink, ShareLink, SharePermission};
use uuid::Uuid;

use crate::context::RequestContext;
use crate::share::link::LinkService;

/// Maximum attempts to mint a unique token before giving up. A
/// collision at 160 bits of entropy means something is badly wrong
/// with the RNG, so the cap is deliberately small.
const MAX_MINT_ATTEMPTS: u32 = 3;

/// A freshly minted share link together with its public URL.
#[derive(Debug, Clone)]
pub struct MintedShare {
    pub share: ShareLink,
    pub share_url: String,
}

/// Creates and revokes share links for owned files.
pub struct ShareService {
    guard: Arc<OwnershipGuard>,
    share_repo: Arc<ShareRepository>,
    link: LinkService,
    public_base_url: String,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        guard: Arc<OwnershipGuard>,
        share_repo: Arc<ShareRepository>,
        public_base_url: &str,
    ) -> Self {
        Self {
            guard,
            share_repo,
            link: LinkService::new(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Mints a share link for a file the caller owns.
    ///
    /// The token is random and its uniqueness is enforced by the
    /// database; on a unique-constraint conflict a fresh token is
    /// generated and the insert retried, up to [`MAX_MINT_ATTEMPTS`].
    pub async fn create_share(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
    ) -> AppResult<MintedShare> {
        self.guard.require_file_owner(ctx.user_id, file_id).await?;

        let mut last_err = None;
        for attempt in 1..=MAX_MINT_ATTEMPTS {
            let token = self.link.generate_token();
            let input = CreateShareLink {
                file_id,
                token,
                permission: SharePermission::View,
                owner_id: ctx.user_id,
            };
            match self.share_repo.create(&input).await {
                Ok(share) => {
                    let share_url = self.share_url(&share.token);
                    return Ok(MintedShare { share, share_url });
                }
                Err(err) if err.kind == ErrorKind::Conflict => {
                    tracing::warn!(attempt, "share token collision, retrying");
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            AppError::conflict("Could not mint a unique share token")
        }))
    }

    /// Revokes a share link the caller owns.
    pub async fn revoke_share(&self, ctx: &RequestContext, share_id: Uuid) -> AppResult<()> {
        let deleted = self.share_repo.delete_owned(share_id, ctx.user_id).await?;
        if !deleted {
            return Err(AppError::not_found("Share link not found"));
        }
        Ok(())
    }

    fn share_url(&self, token: &str) -> String {
        format!("{}/api/share/access/{}", self.public_base_url, token)
    }
}
