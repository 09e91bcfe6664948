use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;

use settle_core::{impl_state_host, prelude::*};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct CounterState {
    counter: i64,
}

struct CounterApp {
    state: CounterState,
}

impl_state_host!(CounterApp, CounterState);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = Rc::new(RefCell::new(CounterApp {
        state: CounterState::default(),
    }));
    let set_state = create_set_state(&app);

    println!("counter demo. commands: +  -  reset  <number>  q");
    println!("counter = {}", app.borrow().state().counter);

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "+" | "inc" => set_state.set(|prev| CounterState {
                counter: prev.counter + 1,
            }),
            "-" | "dec" => set_state.set(|prev| CounterState {
                counter: prev.counter - 1,
            }),
            "reset" => set_state.replace(CounterState::default()),
            other => match other.parse::<i64>() {
                Ok(n) => set_state.replace(CounterState { counter: n }),
                Err(_) => {
                    println!("unknown command: {other}");
                    continue;
                }
            },
        }

        let counter = app.borrow().state().counter;
        log::info!("counter -> {counter}");
        println!("counter = {counter}");
    }

    Ok(())
}
