use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl,
    guest_booking::GuestBookingRepositoryImpl, health::HealthCheckRepositoryImpl,
    menu::MenuRepositoryImpl, off_day::OffDayRepositoryImpl, rebate::RebateRepositoryImpl,
    user::UserRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::model::date::MessClock;
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, guest_booking::GuestBookingRepository,
    health::HealthCheckRepository, menu::MenuRepository, off_day::OffDayRepository,
    rebate::RebateRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    menu_repository: Arc<dyn MenuRepository>,
    off_day_repository: Arc<dyn OffDayRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    guest_booking_repository: Arc<dyn GuestBookingRepository>,
    rebate_repository: Arc<dyn RebateRepository>,
    clock: MessClock,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let menu_repository = Arc::new(MenuRepositoryImpl::new(pool.clone()));
        let off_day_repository = Arc::new(OffDayRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let guest_booking_repository = Arc::new(GuestBookingRepositoryImpl::new(pool.clone()));
        let rebate_repository = Arc::new(RebateRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            menu_repository,
            off_day_repository,
            booking_repository,
            guest_booking_repository,
            rebate_repository,
            clock: MessClock::new(app_config.mess.timezone),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn menu_repository(&self) -> Arc<dyn MenuRepository> {
        self.menu_repository.clone()
    }

    pub fn off_day_repository(&self) -> Arc<dyn OffDayRepository> {
        self.off_day_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn guest_booking_repository(&self) -> Arc<dyn GuestBookingRepository> {
        self.guest_booking_repository.clone()
    }

    pub fn rebate_repository(&self) -> Arc<dyn RebateRepository> {
        self.rebate_repository.clone()
    }

    // 「今日」はメスのタイムゾーンで判定する
    pub fn clock(&self) -> MessClock {
        self.clock
    }
}
