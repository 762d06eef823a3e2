//! Control loop task
//!
//! Supervises one session after another: toy discovery, the wake/LED
//! startup sequence, the fixed-cadence tick loop, and termination. The
//! tick loop itself is single-threaded by construction; the cadence sleep
//! is its only suspension point besides the actuator writes.

use defmt::*;
use embassy_rp::uart::BufferedUart;
use embassy_time::{Duration, Instant, Ticker, Timer};

use rollpad_core::config::RemoteConfig;
use rollpad_core::session::{MotionCommand, Session, TerminateReason, TickStatus};
use rollpad_core::state::LifecycleEvent;
use rollpad_core::traits::{ButtonSource, MotionActuator};

use crate::buttons::GpioButtons;
use crate::channels::publish;
use crate::link::{LinkError, ToyLink};

/// Scan window handed to the bridge
const SCAN_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between discovery retries
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// How long the terminated screen lingers before reconnecting
const TERMINATED_LINGER: Duration = Duration::from_secs(3);

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum SessionEnd {
    /// Watchdog expiry - the expected way out
    IdleTimeout,
    /// Button source failed mid-tick
    InputFault,
    /// Actuator call failed mid-tick
    ActuatorFault,
}

/// Session supervisor task
#[embassy_executor::task]
pub async fn control_task(mut buttons: GpioButtons, mut link: ToyLink<BufferedUart>) {
    info!("Control task started");
    let config = RemoteConfig::default();

    loop {
        info!("Start scanning...");
        publish(LifecycleEvent::Scanning);

        let toy = match link.discover(SCAN_TIMEOUT).await {
            Ok(toy) => toy,
            Err(LinkError::NotFound) => {
                warn!("No toy found");
                publish(LifecycleEvent::NotFound);
                Timer::after(RETRY_DELAY).await;
                continue;
            }
            Err(e) => {
                error!("Discovery failed: {:?}", e);
                publish(LifecycleEvent::Terminated);
                Timer::after(RETRY_DELAY).await;
                continue;
            }
        };

        info!("Connected to {}", toy.name.as_str());
        publish(LifecycleEvent::Connected {
            name: toy.name.clone(),
            address: toy.address,
        });

        if wake_toy(&mut link).await.is_err() {
            error!("Toy startup sequence failed");
            publish(LifecycleEvent::Terminated);
            Timer::after(RETRY_DELAY).await;
            continue;
        }

        publish(LifecycleEvent::Running);
        let end = drive_session(&mut buttons, &mut link, &config).await;
        info!("Session over: {:?}", end);

        publish(LifecycleEvent::Terminated);
        Timer::after(TERMINATED_LINGER).await;
    }
}

/// Wake the toy and light it up, mirroring its power-on ritual
async fn wake_toy<U>(link: &mut ToyLink<U>) -> Result<(), LinkError>
where
    U: embedded_io_async::Read + embedded_io_async::Write,
{
    link.wake().await?;
    link.set_main_led(255, 255, 255).await?;
    link.set_back_led(255).await?;
    Ok(())
}

/// Run the tick loop until the session ends
///
/// Any in-loop error is fatal to this session only: the loop breaks out
/// without retrying the tick and the supervisor reconnects.
async fn drive_session<B, A>(buttons: &mut B, actuator: &mut A, config: &RemoteConfig) -> SessionEnd
where
    B: ButtonSource,
    A: MotionActuator,
{
    let mut session = Session::new(*config, Instant::now().as_millis());
    let mut ticker = Ticker::every(Duration::from_millis(config.tick_interval_ms));

    loop {
        let Ok(state) = buttons.sample() else {
            return SessionEnd::InputFault;
        };

        let outcome = session.tick(state, Instant::now().as_millis());

        if let Some(prev) = outcome.released {
            debug!("stop {:?}", prev);
        }

        let dispatched = match outcome.command {
            Some(MotionCommand::Roll { heading, speed }) => {
                actuator.start_roll(heading, speed).await
            }
            Some(MotionCommand::Stop { heading, reverse }) => {
                actuator.stop_roll(heading, reverse).await
            }
            None => Ok(()),
        };
        if dispatched.is_err() {
            return SessionEnd::ActuatorFault;
        }

        if let TickStatus::Terminate(reason) = outcome.status {
            match reason {
                TerminateReason::IdleTimeout => warn!("Idle timeout, terminating session"),
            }
            return SessionEnd::IdleTimeout;
        }

        ticker.next().await;
    }
}
