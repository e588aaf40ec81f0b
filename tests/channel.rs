mod common;

mod tests {
    use std::sync::Arc;
    use std::thread;

    use myrtio_light_scene::channel::{Channel, CommandQueue, TryReceiveError, TrySendError};
    use myrtio_light_scene::command::{AdminCommand, SceneCommand};
    use myrtio_light_scene::controller::SceneController;
    use myrtio_light_scene::runner::SceneRunner;
    use myrtio_light_scene::strip::MemoryStrip;

    use super::common::{BLUE, RED, fast_config};

    #[test]
    fn test_fifo_order() {
        let channel: Channel<u32, 4> = Channel::new();
        assert!(channel.is_empty());
        channel.try_send(1).unwrap();
        channel.try_send(2).unwrap();
        channel.try_send(3).unwrap();

        assert_eq!(channel.len(), 3);
        assert_eq!(channel.try_receive(), Ok(1));
        assert_eq!(channel.try_receive(), Ok(2));
        assert_eq!(channel.try_receive(), Ok(3));
        assert_eq!(channel.try_receive(), Err(TryReceiveError::Empty));
    }

    #[test]
    fn test_full_channel_returns_value() {
        let channel: Channel<u32, 2> = Channel::new();
        channel.try_send(1).unwrap();
        channel.try_send(2).unwrap();

        let err = channel.try_send(3).unwrap_err();
        assert_eq!(err, TrySendError::Full(3));
        assert_eq!(err.into_inner(), 3);
    }

    #[test]
    fn test_closed_channel_drains() {
        let channel: Channel<u32, 4> = Channel::new();
        channel.try_send(1).unwrap();
        channel.close();

        assert!(channel.is_closed());
        assert_eq!(channel.try_send(2), Err(TrySendError::Closed(2)));
        assert_eq!(channel.send_blocking(3), Err(3));
        assert_eq!(channel.try_receive(), Ok(1));
        assert_eq!(channel.try_receive(), Err(TryReceiveError::Closed));
    }

    #[test]
    fn test_send_blocking_waits_for_room() {
        let channel: Arc<Channel<u32, 1>> = Arc::new(Channel::new());
        channel.try_send(1).unwrap();

        let producer = {
            let channel = Arc::clone(&channel);
            thread::spawn(move || channel.send_blocking(2))
        };
        thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(channel.try_receive(), Ok(1));

        assert_eq!(producer.join().unwrap(), Ok(()));
        assert_eq!(channel.try_receive(), Ok(2));
    }

    #[test]
    fn test_runner_drains_in_order() {
        let controller = SceneController::new(MemoryStrip::new(4), fast_config()).unwrap();
        let queue: Arc<CommandQueue<8>> = Arc::new(CommandQueue::new());
        queue.try_send(SceneCommand::painted("a", [RED]).into()).unwrap();
        queue.try_send(AdminCommand::UpdateBrightness(30).into()).unwrap();
        queue.try_send(SceneCommand::painted("b", [BLUE]).into()).unwrap();

        let mut runner = SceneRunner::new(controller, Arc::clone(&queue));
        assert_eq!(runner.drain(), 3);

        let controller = runner.controller();
        assert_eq!(controller.state().last_command_id(), Some("b"));
        assert_eq!(controller.state().brightness(), 255);
        assert_eq!(controller.strip().with(|strip| strip.frame().to_vec()), vec![BLUE; 4]);
        assert_eq!(runner.drain(), 0);
    }

    #[test]
    fn test_runner_stops_when_closed() {
        let controller = SceneController::new(MemoryStrip::new(6), fast_config()).unwrap();
        let strip = controller.strip().clone();
        let queue: Arc<CommandQueue<8>> = Arc::new(CommandQueue::new());
        queue
            .try_send(SceneCommand::animated("a", "Twinkle", [RED]).into())
            .unwrap();
        queue.close();

        SceneRunner::new(controller, queue).run(true);

        assert!(strip.with(|strip| strip.is_dark()));
        assert!(strip.with(|strip| strip.show_count()) >= 2);
    }
}
