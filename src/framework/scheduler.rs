use super::{Action, EventQueue, Service, ServiceOutput, TimerBank};
use crate::{
    config::GameConfig,
    error::ServiceError,
    hal::{InputPin, Peripherals},
    input::{DisplayReadyLine, JoystickButton, TouchSensor},
    model::{Event, ServiceId, Symbol},
    services::{
        DisplayEngine, DisplaySnapshot, GameFlowEngine, GameFlowSnapshot, LedEngine, LedSnapshot,
        SequenceEngine, SequenceSnapshot, WatchdogEngine, WatchdogStateId,
    },
    telemetry,
};

/// Upper bound on dispatches per cycle so a posting loop cannot starve input
/// polling.
pub const MAX_STEPS_PER_CYCLE: usize = 64;

/// Owns the five services, their queues and timers, and the board.
///
/// Each `step` takes one event from the highest-priority non-empty queue,
/// runs it to completion and carries out the returned actions.
pub struct Scheduler<P: Peripherals> {
    config: &'static GameConfig,
    peripherals: P,
    now_ms: u32,
    timers: TimerBank,
    queues: [EventQueue; ServiceId::COUNT],
    watchdog: WatchdogEngine,
    game_flow: GameFlowEngine,
    sequence: SequenceEngine,
    display: DisplayEngine,
    led: LedEngine,
    touch: TouchSensor,
    joystick: JoystickButton,
    display_ready: DisplayReadyLine,
    faults: u32,
    last_fault: Option<ServiceError>,
}

impl<P: Peripherals> Scheduler<P> {
    pub fn new(peripherals: P, config: &'static GameConfig) -> Self {
        Self::with_sequence(peripherals, config, SequenceEngine::new(config))
    }

    /// Same as [`Scheduler::new`] with a caller-built sequence service, used to
    /// pin the cue generator seed.
    pub fn with_sequence(
        peripherals: P,
        config: &'static GameConfig,
        sequence: SequenceEngine,
    ) -> Self {
        let mut scheduler = Self {
            config,
            peripherals,
            now_ms: 0,
            timers: TimerBank::new(),
            queues: ServiceId::ALL.map(EventQueue::new),
            watchdog: WatchdogEngine::new(config),
            game_flow: GameFlowEngine::new(config),
            sequence,
            display: DisplayEngine::new(),
            led: LedEngine::new(config),
            touch: TouchSensor::new(),
            joystick: JoystickButton::new(),
            display_ready: DisplayReadyLine::new(),
            faults: 0,
            last_fault: None,
        };

        let first = scheduler.peripherals.read_joystick_axes();
        let second = scheduler.peripherals.read_joystick_axes();
        let neutral = first.midpoint(second);
        log::info!("scheduler: joystick neutral x={} y={}", neutral.x, neutral.y);

        scheduler.deliver(ServiceId::Sequence, Event::Calibrate(neutral));
        for service in [
            ServiceId::Watchdog,
            ServiceId::GameFlow,
            ServiceId::Display,
            ServiceId::Led,
        ] {
            scheduler.deliver(service, Event::Init);
        }
        scheduler
    }

    /// Appends `event` to `to`'s queue.
    pub fn post(&mut self, to: ServiceId, event: Event) -> Result<(), ServiceError> {
        self.queues[to.index()].push_back(event)
    }

    /// Dispatches one event. `Ok(false)` means every queue was empty. An
    /// error reports a fault raised while handling the event; the event was
    /// still consumed and the remaining actions were carried out.
    pub fn step(&mut self) -> Result<bool, ServiceError> {
        let Some((service, event)) = self.next_event() else {
            return Ok(false);
        };

        let output = self.dispatch(service, &event);
        let mut outcome = Ok(true);

        // Recalls go to the queue front; pushing them last-first keeps their order.
        for action in output.actions.iter().rev() {
            if let Action::Recall { to, event } = *action {
                if let Err(fault) = self.queues[to.index()].push_front(event) {
                    outcome = Err(self.note_fault(fault));
                }
            }
        }
        for action in output.actions.iter() {
            if let Err(fault) = self.apply(*action) {
                outcome = Err(self.note_fault(fault));
            }
        }
        if let Some(fault) = output.fault {
            outcome = Err(self.note_fault(fault));
        }
        outcome
    }

    /// Steps until every queue is empty or `max_steps` dispatches ran.
    /// Returns the number of dispatches.
    pub fn run_until_idle(&mut self, max_steps: usize) -> usize {
        let mut dispatched = 0;
        while dispatched < max_steps {
            match self.step() {
                Ok(false) => break,
                Ok(true) | Err(_) => dispatched += 1,
            }
        }
        if dispatched == max_steps && self.has_pending() {
            log::warn!("scheduler: step budget exhausted with events pending");
        }
        dispatched
    }

    /// Samples the touch pad, joystick button and display busy line, turning
    /// edges into events.
    pub fn poll_inputs(&mut self) {
        let touch_level = self.peripherals.read_digital(InputPin::TouchSensor);
        if self.touch.poll(touch_level) {
            log::debug!("scheduler: touch press");
            self.player_pressed();
        }

        let button_level = self.peripherals.read_digital(InputPin::JoystickButton);
        let peripherals = &mut self.peripherals;
        if let Some(sample) = self
            .joystick
            .poll(button_level, || peripherals.read_joystick_axes())
        {
            log::debug!("scheduler: joystick release x={} y={}", sample.x, sample.y);
            self.deliver(ServiceId::Sequence, Event::JoystickInput(sample));
            self.player_pressed();
        }

        let busy = self.peripherals.display_is_busy();
        if self.display_ready.poll(busy) {
            self.deliver(ServiceId::Display, Event::RenderComplete);
        }
    }

    /// Moves the clock forward and queues a timeout for every timer that
    /// expired, in timer id order.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(elapsed_ms);
        for timer in self.timers.advance(elapsed_ms) {
            self.deliver(timer.recipient(), Event::Timeout(timer));
        }
    }

    /// One scheduler tick: clock, inputs, then dispatch until idle.
    pub fn cycle(&mut self, elapsed_ms: u32) -> usize {
        self.advance(elapsed_ms);
        self.poll_inputs();
        self.run_until_idle(MAX_STEPS_PER_CYCLE)
    }

    /// Runs whole quanta until at least `duration_ms` has passed.
    pub fn run_for(&mut self, duration_ms: u32) {
        let quantum = self.config.timing.scheduler_quantum_ms.max(1);
        self.run_until_idle(MAX_STEPS_PER_CYCLE);
        let mut elapsed = 0;
        while elapsed < duration_ms {
            self.cycle(quantum);
            elapsed = elapsed.saturating_add(quantum);
        }
    }

    pub fn peripherals(&self) -> &P {
        &self.peripherals
    }

    pub fn peripherals_mut(&mut self) -> &mut P {
        &mut self.peripherals
    }

    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    pub fn timers(&self) -> &TimerBank {
        &self.timers
    }

    pub fn pending(&self, service: ServiceId) -> usize {
        self.queues[service.index()].len()
    }

    pub fn has_pending(&self) -> bool {
        self.queues.iter().any(|queue| !queue.is_empty())
    }

    pub fn faults(&self) -> u32 {
        self.faults
    }

    pub fn last_fault(&self) -> Option<ServiceError> {
        self.last_fault
    }

    pub fn game_flow(&self) -> GameFlowSnapshot {
        self.game_flow.snapshot()
    }

    pub fn sequence(&self) -> SequenceSnapshot {
        self.sequence.snapshot()
    }

    pub fn sequence_symbols(&self) -> &[Symbol] {
        self.sequence.sequence()
    }

    pub fn display(&self) -> DisplaySnapshot {
        self.display.snapshot()
    }

    pub fn led(&self) -> LedSnapshot {
        self.led.snapshot()
    }

    pub fn watchdog(&self) -> (WatchdogStateId, u32) {
        (self.watchdog.state(), self.watchdog.resets())
    }

    fn player_pressed(&mut self) {
        self.deliver(ServiceId::GameFlow, Event::PlayerPress);
        self.deliver(ServiceId::Watchdog, Event::InputDetected);
    }

    fn next_event(&mut self) -> Option<(ServiceId, Event)> {
        ServiceId::ALL.into_iter().find_map(|service| {
            self.queues[service.index()]
                .pop()
                .map(|event| (service, event))
        })
    }

    fn dispatch(&mut self, service: ServiceId, event: &Event) -> ServiceOutput {
        let now_ms = self.now_ms;
        match service {
            ServiceId::Watchdog => dispatch_to(&mut self.watchdog, event, now_ms),
            ServiceId::GameFlow => dispatch_to(&mut self.game_flow, event, now_ms),
            ServiceId::Sequence => dispatch_to(&mut self.sequence, event, now_ms),
            ServiceId::Display => dispatch_to(&mut self.display, event, now_ms),
            ServiceId::Led => dispatch_to(&mut self.led, event, now_ms),
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), ServiceError> {
        match action {
            Action::Post { to, event } => self.post(to, event)?,
            Action::Recall { .. } => {}
            Action::ArmTimer { timer, duration_ms } => self.timers.arm(timer, duration_ms),
            Action::DisarmTimer(timer) => self.timers.disarm(timer),
            Action::PrepareDisplay => self.peripherals.prepare_display(),
            Action::Render {
                kind,
                param,
                context,
            } => {
                telemetry::record_render();
                self.display_ready.arm();
                self.peripherals.render_screen(kind, param, &context);
            }
            Action::WriteLeds(frame) => self.peripherals.set_led_colors(&frame),
        }
        Ok(())
    }

    /// Posts on behalf of the scheduler itself; a full queue is logged and
    /// counted.
    fn deliver(&mut self, to: ServiceId, event: Event) {
        if let Err(fault) = self.post(to, event) {
            self.note_fault(fault);
        }
    }

    fn note_fault(&mut self, fault: ServiceError) -> ServiceError {
        if let ServiceError::QueueOverflow(_) = fault {
            telemetry::record_queue_overflow();
        }
        self.faults = self.faults.saturating_add(1);
        self.last_fault = Some(fault);
        log::warn!("scheduler: fault={}", fault);
        fault
    }
}

fn dispatch_to<S: Service>(service: &mut S, event: &Event, now_ms: u32) -> ServiceOutput {
    log::trace!("scheduler: dispatch to={} event={:?}", S::ID.label(), event);
    service.handle(event, now_ms)
}
