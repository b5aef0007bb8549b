use super::*;
use crate::api::UserCredential;
use crate::error::AppErrorKind;
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

// =========================================================
// Shared Mock Components
// =========================================================

struct TestContext {
    /// Operation log to verify calling order
    log: RefCell<Vec<String>>,
    /// In-memory session (reset per test, like a process restart)
    session: RefCell<Option<UserCredential>>,
    /// Durable onboarding flag
    onboarding_complete: RefCell<bool>,
    /// Simulate the identity provider rejecting credentials
    fail_provider: RefCell<bool>,
    /// Simulate the durable flag write failing
    fail_flag_write: RefCell<bool>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            session: RefCell::new(None),
            onboarding_complete: RefCell::new(false),
            fail_provider: RefCell::new(false),
            fail_flag_write: RefCell::new(false),
        }
    }

    fn push_log(&self, msg: String) {
        self.log.borrow_mut().push(msg);
    }
}

fn make_credential(username: &str) -> UserCredential {
    UserCredential {
        username: username.to_string(),
        id_token: format!("token-{username}"),
    }
}

struct MockProvider {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl IdentityProvider for MockProvider {
    async fn sign_in(&self, username: &str, _password: &str) -> AppResult<UserCredential> {
        self.ctx.push_log(format!("provider:sign_in:{}", username));
        if *self.ctx.fail_provider.borrow() {
            return Err(AppError::auth("Invalid credentials"));
        }
        Ok(make_credential(username))
    }

    async fn sign_up(&self, username: &str, _password: &str) -> AppResult<UserCredential> {
        self.ctx.push_log(format!("provider:sign_up:{}", username));
        if *self.ctx.fail_provider.borrow() {
            return Err(AppError::auth("Username already taken"));
        }
        Ok(make_credential(username))
    }
}

struct MockSession {
    ctx: Rc<TestContext>,
}

impl SessionStore for MockSession {
    fn store(&self, credential: UserCredential) {
        self.ctx
            .push_log(format!("session:store:{}", credential.username));
        *self.ctx.session.borrow_mut() = Some(credential);
    }

    fn clear(&self) {
        self.ctx.push_log("session:clear".to_string());
        *self.ctx.session.borrow_mut() = None;
    }
}

struct MockFlag {
    ctx: Rc<TestContext>,
}

impl OnboardingStore for MockFlag {
    fn is_complete(&self) -> bool {
        let value = *self.ctx.onboarding_complete.borrow();
        self.ctx.push_log(format!("flag:is_complete:{}", value));
        value
    }

    fn mark_complete(&self) -> AppResult<()> {
        self.ctx.push_log("flag:mark_complete".to_string());
        if *self.ctx.fail_flag_write.borrow() {
            return Err(AppError::storage("Simulated write failure"));
        }
        *self.ctx.onboarding_complete.borrow_mut() = true;
        Ok(())
    }
}

struct MockNav {
    ctx: Rc<TestContext>,
}

impl RouteSink for MockNav {
    fn replace(&self, route: AppRoute) {
        self.ctx.push_log(format!("nav:replace:{}", route.to_path()));
    }
}

// Helper bundling the mocks so a flow can be borrowed out of it
struct TestEnv {
    ctx: Rc<TestContext>,
    provider: MockProvider,
    session: MockSession,
    flag: MockFlag,
    nav: MockNav,
}

impl TestEnv {
    fn new() -> Self {
        let ctx = Rc::new(TestContext::new());
        Self {
            provider: MockProvider { ctx: ctx.clone() },
            session: MockSession { ctx: ctx.clone() },
            flag: MockFlag { ctx: ctx.clone() },
            nav: MockNav { ctx: ctx.clone() },
            ctx,
        }
    }

    fn flow(&self) -> AuthFlow<'_, MockProvider, MockSession, MockFlag, MockNav> {
        AuthFlow::new(&self.provider, &self.session, &self.flag, &self.nav)
    }
}

// =========================================================
// Tests
// =========================================================

#[tokio::test]
async fn test_sign_in_updates_session_before_navigation() {
    let env = TestEnv::new();
    env.flow().sign_in("alice", "pw123").await.unwrap();

    let logs = env.ctx.log.borrow();

    let store_idx = logs
        .iter()
        .position(|r| r == "session:store:alice")
        .expect("should store the session");
    let nav_idx = logs
        .iter()
        .position(|r| r.starts_with("nav:replace"))
        .expect("should navigate");

    assert!(
        store_idx < nav_idx,
        "session must be updated before any navigation call"
    );
}

#[tokio::test]
async fn test_sign_in_routes_to_onboarding_on_first_run() {
    let env = TestEnv::new();
    env.flow().sign_in("alice", "pw123").await.unwrap();

    assert!(env.ctx.session.borrow().is_some());
    let logs = env.ctx.log.borrow();
    assert!(logs.contains(&"nav:replace:/onboarding".to_string()));
}

#[tokio::test]
async fn test_sign_in_with_completed_onboarding_goes_straight_to_feed() {
    let env = TestEnv::new();
    *env.ctx.onboarding_complete.borrow_mut() = true;

    env.flow().sign_in("alice", "pw123").await.unwrap();

    let logs = env.ctx.log.borrow();
    assert!(logs.contains(&"nav:replace:/private".to_string()));
    // 引导组从未被路由到
    assert!(!logs.iter().any(|s| s == "nav:replace:/onboarding"));
}

#[tokio::test]
async fn test_sign_in_failure_leaves_state_untouched() {
    let env = TestEnv::new();
    *env.ctx.fail_provider.borrow_mut() = true;

    let result = env.flow().sign_in("alice", "wrong").await;

    assert!(matches!(result, Err(ref e) if e.kind == AppErrorKind::Auth));
    assert!(env.ctx.session.borrow().is_none());
    let logs = env.ctx.log.borrow();
    assert!(!logs.iter().any(|s| s.starts_with("session:")));
    assert!(!logs.iter().any(|s| s.starts_with("nav:")));
}

#[tokio::test]
async fn test_sign_up_password_mismatch_never_calls_provider() {
    let env = TestEnv::new();

    let result = env.flow().sign_up("bob", "pw123", "pw124").await;

    assert!(matches!(result, Err(ref e) if e.kind == AppErrorKind::Auth));
    // 对身份提供方零调用
    let logs = env.ctx.log.borrow();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_sign_up_success_stays_pre_auth() {
    let env = TestEnv::new();

    env.flow().sign_up("bob", "pw123", "pw123").await.unwrap();

    // 注册不建立会话也不导航；确认信息由登录页展示
    assert!(env.ctx.session.borrow().is_none());
    let logs = env.ctx.log.borrow();
    assert!(logs.contains(&"provider:sign_up:bob".to_string()));
    assert!(!logs.iter().any(|s| s.starts_with("nav:")));
}

#[tokio::test]
async fn test_finish_onboarding_persists_before_navigation() {
    let env = TestEnv::new();

    env.flow().finish_onboarding().unwrap();

    let logs = env.ctx.log.borrow();
    let write_idx = logs
        .iter()
        .position(|r| r == "flag:mark_complete")
        .expect("should persist the flag");
    let nav_idx = logs
        .iter()
        .position(|r| r == "nav:replace:/private")
        .expect("should navigate to the main group");

    assert!(write_idx < nav_idx, "should persist before navigating");
    assert!(*env.ctx.onboarding_complete.borrow());
}

#[tokio::test]
async fn test_finish_onboarding_write_failure_blocks_navigation() {
    let env = TestEnv::new();
    *env.ctx.fail_flag_write.borrow_mut() = true;

    let result = env.flow().finish_onboarding();

    assert!(matches!(result, Err(ref e) if e.kind == AppErrorKind::Storage));
    assert!(!*env.ctx.onboarding_complete.borrow());
    let logs = env.ctx.log.borrow();
    assert!(!logs.iter().any(|s| s.starts_with("nav:")));
}

#[tokio::test]
async fn test_finish_onboarding_navigates_exactly_once() {
    let env = TestEnv::new();

    env.flow().finish_onboarding().unwrap();

    let logs = env.ctx.log.borrow();
    let nav_count = logs.iter().filter(|s| s.starts_with("nav:")).count();
    assert_eq!(nav_count, 1);
}

#[tokio::test]
async fn test_sign_out_revokes_access_but_keeps_flag() {
    let env = TestEnv::new();
    *env.ctx.onboarding_complete.borrow_mut() = true;
    env.flow().sign_in("alice", "pw123").await.unwrap();

    env.flow().sign_out();

    assert!(env.ctx.session.borrow().is_none());
    // 引导标记跨登出持久
    assert!(*env.ctx.onboarding_complete.borrow());
    let logs = env.ctx.log.borrow();
    assert!(logs.contains(&"nav:replace:/".to_string()));
}

#[tokio::test]
async fn test_persisted_flag_survives_restart() {
    // 第一个进程：完成引导
    let first = TestEnv::new();
    first.flow().sign_in("alice", "pw123").await.unwrap();
    first.flow().finish_onboarding().unwrap();
    assert!(*first.ctx.onboarding_complete.borrow());

    // 第二个进程：会话清零，标记持久，登录直达主界面
    let second = TestEnv::new();
    *second.ctx.onboarding_complete.borrow_mut() = *first.ctx.onboarding_complete.borrow();

    second.flow().sign_in("alice", "pw123").await.unwrap();

    let logs = second.ctx.log.borrow();
    assert!(logs.contains(&"nav:replace:/private".to_string()));
    assert!(!logs.iter().any(|s| s == "nav:replace:/onboarding"));
}
