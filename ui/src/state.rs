use insider_business::{
    ApplicationsTableState, BusinessConfig, CreateUserCommand, CreateUserCompute, CreateUserInput,
    DeleteUserCommand, DeleteUserCompute, DeleteUserInput, ListApplicationsCommand,
    ListApplicationsCompute, ListUsersCommand, ListUsersCompute, ListUsersInput, Notifications,
    Role, UpdateUserStatusCommand, UpdateUserStatusCompute, UpdateUserStatusInput,
    UsersPanelState, UsersQueryCache,
};
use insider_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Role the dashboard is viewed as; drives the column policy.
    pub role: Option<Role>,
    /// Application records adopted from the last successful fetch. Edits made
    /// through the edit modal are applied here.
    pub records: Vec<insider_business::Application>,
    /// Whether `records` has been populated from a fetch at least once.
    pub records_loaded: bool,
    /// Generation of the fetch `records` was last adopted from.
    adopted_generation: u64,
}

fn build_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(ApplicationsTableState::default());
    ctx.add_state(UsersQueryCache::default());
    ctx.add_state(Notifications::default());
    ctx.add_state(ListUsersInput::default());
    ctx.add_state(CreateUserInput::default());
    ctx.add_state(UpdateUserStatusInput::default());
    ctx.add_state(DeleteUserInput::default());
    ctx.add_state(UsersPanelState::default());

    ctx.record_compute(ListApplicationsCompute::default());
    ctx.record_compute(ListUsersCompute::default());
    ctx.record_compute(CreateUserCompute::default());
    ctx.record_compute(UpdateUserStatusCompute::default());
    ctx.record_compute(DeleteUserCompute::default());

    ctx.record_command(ListApplicationsCommand);
    ctx.record_command(ListUsersCommand);
    ctx.record_command(CreateUserCommand);
    ctx.record_command(UpdateUserStatusCommand);
    ctx.record_command(DeleteUserCommand);

    ctx
}

impl Default for State {
    fn default() -> Self {
        Self {
            ctx: build_ctx(BusinessConfig::default()),
            role: Some(Role::Admin),
            records: Vec::new(),
            records_loaded: false,
            adopted_generation: 0,
        }
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self {
            ctx: build_ctx(BusinessConfig::new(base_url)),
            role: Some(Role::Admin),
            records: Vec::new(),
            records_loaded: false,
            adopted_generation: 0,
        }
    }

    /// Copies freshly fetched applications into `records` whenever the
    /// compute holds a fetch newer than the one last adopted, so a refresh
    /// replaces stale rows instead of being dropped.
    pub fn adopt_fetched_records(&mut self) {
        let Some(compute) = self.ctx.cached::<ListApplicationsCompute>() else {
            return;
        };
        if compute.generation <= self.adopted_generation {
            return;
        }
        if let Some(applications) = compute.applications() {
            self.records = applications.to_vec();
            self.records_loaded = true;
            self.adopted_generation = compute.generation;
        }
    }
}
