//! Event Catalog
//!
//! Hard-coded table of world events from 1900 to 2110, in chronological
//! order. Several years carry more than one entry; all of them are kept.

use crate::components::CatalogEntry;

const fn entry(year: i32, title: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        year,
        title,
        description,
    }
}

/// Every known event, ordered by year
pub static CATALOG: &[CatalogEntry] = &[
    entry(1900, "Quantum Theory Introduced",
          "Max Planck's discovery of quantum mechanics revolutionized our understanding of physics and laid groundwork for modern technology."),
    entry(1901, "First Nobel Prizes Awarded",
          "The establishment of the Nobel Prizes began recognizing groundbreaking achievements in science and peace."),
    entry(1902, "First Trans-Pacific Cable",
          "Communication between North America and Asia was revolutionized with the completion of the Pacific telegraph cable."),
    entry(1903, "Wright Brothers' First Flight",
          "The first powered, controlled aircraft flight at Kitty Hawk marked the beginning of the aviation age."),
    entry(1904, "New York Subway Opens",
          "The opening of the New York City Subway system transformed urban transportation."),
    entry(1905, "Einstein's Special Relativity",
          "Einstein's theory fundamentally changed our understanding of space, time, and the universe."),
    entry(1906, "San Francisco Earthquake",
          "One of the worst natural disasters in U.S. history destroyed much of San Francisco."),
    entry(1907, "First Plastic Invented",
          "The invention of Bakelite marked the beginning of the modern plastics industry."),
    entry(1908, "Model T Ford Introduced",
          "Henry Ford's affordable automobile revolutionized transportation and manufacturing."),
    entry(1909, "First North Pole Expedition",
          "Robert Peary's expedition reached the North Pole, marking a milestone in exploration."),
    entry(1910, "First Commercial Radio Broadcast",
          "The birth of radio broadcasting began transforming mass communication and entertainment."),
    entry(1911, "First Air Mail Service",
          "The world's first air mail service began in India, revolutionizing postal delivery."),
    entry(1912, "Titanic Sinks",
          "The tragic sinking of the 'unsinkable' ship led to major maritime safety reforms."),
    entry(1913, "Assembly Line Introduced",
          "Henry Ford's assembly line revolutionized manufacturing and industry."),
    entry(1914, "World War I Begins",
          "The Great War began, forever changing global politics and society."),
    entry(1915, "Einstein's General Relativity",
          "Einstein's theory of gravity transformed our understanding of the cosmos."),
    entry(1916, "First Birth Control Clinic",
          "Margaret Sanger opened the first birth control clinic in the United States."),
    entry(1917, "Russian Revolution",
          "The Bolshevik Revolution created the world's first communist state."),
    entry(1918, "Spanish Flu Pandemic",
          "The deadliest pandemic in modern history infected one-third of the world's population."),
    entry(1919, "Treaty of Versailles",
          "The peace treaty ending World War I reshaped international boundaries and relations."),
    entry(1920, "Women's Suffrage in US",
          "The 19th Amendment gave American women the right to vote."),
    entry(1921, "First Radio News Program",
          "Regular radio news broadcasts began, changing how people received information."),
    entry(1922, "Discovery of King Tut's Tomb",
          "The most complete ancient Egyptian royal tomb found sparked worldwide interest in archaeology."),
    entry(1923, "First Television Demonstration",
          "Vladimir Zworykin demonstrated the first electronic television system."),
    entry(1924, "First Winter Olympics",
          "The first Winter Olympic Games were held in Chamonix, France."),
    entry(1925, "Scopes Monkey Trial",
          "The famous trial highlighted the debate between evolution and creationism."),
    entry(1926, "First Liquid-Fuel Rocket",
          "Robert Goddard launched the first liquid-fueled rocket, pioneering space exploration."),
    entry(1927, "First Trans-Atlantic Solo Flight",
          "Charles Lindbergh's historic flight captured the world's imagination."),
    entry(1928, "Discovery of Penicillin",
          "Alexander Fleming's discovery revolutionized medicine with the first antibiotic."),
    entry(1929, "Stock Market Crash",
          "The Wall Street Crash marked the beginning of the Great Depression."),
    entry(1930, "Discovery of Pluto",
          "Clyde Tombaugh discovered Pluto, then considered the ninth planet."),
    entry(1931, "Empire State Building Completed",
          "The world's tallest building symbolized American ambition during the Depression."),
    entry(1932, "Discovery of Neutron",
          "James Chadwick's discovery advanced our understanding of atomic structure."),
    entry(1933, "Hitler Becomes Chancellor",
          "Adolf Hitler's rise to power in Germany set the stage for World War II."),
    entry(1934, "Dust Bowl Begins",
          "Severe drought and dust storms devastated American agriculture."),
    entry(1935, "Social Security Act",
          "The cornerstone of America's social welfare system was established."),
    entry(1936, "First TV Broadcasting Service",
          "BBC launched the world's first public television service."),
    entry(1937, "Hindenburg Disaster",
          "The airship explosion effectively ended the era of passenger airships."),
    entry(1938, "Nuclear Fission Discovered",
          "The discovery of nuclear fission led to both nuclear power and weapons."),
    entry(1939, "World War II Begins",
          "The start of the most devastating conflict in human history."),
    entry(1940, "Battle of Britain",
          "The RAF's victory prevented German invasion and marked a turning point in WWII."),
    entry(1941, "Pearl Harbor Attack",
          "Japan's attack brought the United States into World War II."),
    entry(1942, "Manhattan Project Begins",
          "The secret atomic bomb project changed warfare forever."),
    entry(1943, "Penicillin Mass Production",
          "The first antibiotic became widely available, saving countless lives."),
    entry(1944, "D-Day Invasion",
          "The largest seaborne invasion in history began the liberation of Western Europe."),
    entry(1945, "Atomic Bombs & WWII Ends",
          "The war ended after atomic bombs were dropped on Japan, ushering in the nuclear age."),
    entry(1946, "First Computer ENIAC",
          "The first general-purpose electronic computer began the digital revolution."),
    entry(1947, "Cold War Begins",
          "The political and military tension between East and West shaped global politics."),
    entry(1948, "State of Israel Established",
          "The creation of Israel dramatically changed Middle East politics."),
    entry(1949, "NATO Formed",
          "The North Atlantic Treaty Organization formed to counter Soviet influence."),
    entry(1950, "Korean War Begins",
          "First major conflict of the Cold War that shaped international relations for decades."),
    entry(1951, "First Color Television Broadcast",
          "The beginning of modern home entertainment that would reshape family life."),
    entry(1952, "Polio Vaccine Developed",
          "Jonas Salk's breakthrough that eventually eradicated a devastating disease."),
    entry(1953, "Discovery of DNA Structure",
          "Watson and Crick revealed the double helix structure, revolutionizing biology and medicine."),
    entry(1954, "First Transistor Radio",
          "Portable electronics began transforming how people consumed media."),
    entry(1955, "Rosa Parks Refuses to Give Up Her Seat",
          "A pivotal moment in the civil rights movement that sparked nationwide change."),
    entry(1956, "First Hard Disk Drive by IBM",
          "The birth of modern data storage technology that would enable the digital revolution."),
    entry(1957, "Sputnik 1 Launched",
          "The first artificial satellite launched the Space Age and the space race between superpowers."),
    entry(1958, "NASA Founded",
          "The United States formally entered the space race, leading to decades of exploration."),
    entry(1959, "First Microchip Invented",
          "Jack Kilby and Robert Noyce's invention that would eventually lead to the computer revolution."),
    entry(1960, "Birth Control Pill Approved",
          "A medical advance that would profoundly change social norms and women's lives."),
    entry(1961, "First Human in Space",
          "Yuri Gagarin's historic orbit of Earth opened the era of human spaceflight."),
    entry(1962, "Cuban Missile Crisis",
          "The closest the world came to nuclear war during the Cold War."),
    entry(1963, "JFK Assassination",
          "A traumatic national moment that marked the end of an era in American politics."),
    entry(1964, "Civil Rights Act Passed",
          "Landmark legislation that prohibited discrimination based on race, color, religion, sex, or national origin."),
    entry(1965, "Vietnam War Escalation",
          "The beginning of major U.S. combat operations that would divide the nation."),
    entry(1966, "Cultural Revolution in China",
          "Mao Zedong's campaign that dramatically changed Chinese society and politics."),
    entry(1967, "First Heart Transplant",
          "Dr. Christiaan Barnard performed the first successful human-to-human heart transplant."),
    entry(1968, "Martin Luther King Jr. Assassination",
          "The loss of a civil rights icon that sparked riots and profound national grief."),
    entry(1969, "Moon Landing",
          "Neil Armstrong and Buzz Aldrin's 'giant leap for mankind' represented the pinnacle of human achievement."),
    entry(1970, "Earth Day First Celebrated",
          "The birth of the modern environmental movement."),
    entry(1971, "Microprocessor Invented",
          "Intel's 4004 chip laid the foundation for the personal computer revolution."),
    entry(1972, "Watergate Scandal Begins",
          "A political scandal that would eventually lead to President Nixon's resignation."),
    entry(1973, "Oil Crisis",
          "OPEC embargo triggered economic shocks and changed energy policies worldwide."),
    entry(1974, "Nixon Resigns",
          "The first and only presidential resignation in U.S. history transformed American politics."),
    entry(1975, "End of Vietnam War",
          "The fall of Saigon marked the end of America's longest war at that time."),
    entry(1976, "Apple Computer Founded",
          "Steve Jobs and Steve Wozniak started a company that would transform personal technology."),
    entry(1977, "First Personal Computer Released",
          "The Apple II, Commodore PET, and TRS-80 brought computing into homes."),
    entry(1978, "First Test Tube Baby",
          "Louise Brown's birth marked a revolution in reproductive technology."),
    entry(1979, "Iranian Revolution",
          "The overthrow of the Shah and establishment of an Islamic Republic changed Middle East dynamics forever."),
    entry(1980, "Mount St. Helens Eruption",
          "Most destructive volcanic event in U.S. history, reshaping the landscape and scientific understanding."),
    entry(1981, "First Cases of AIDS Reported",
          "The beginning of a global health crisis that would claim millions of lives."),
    entry(1982, "First CD Player Released",
          "The digital audio revolution began, transforming how people consumed music."),
    entry(1983, "Internet Officially Born",
          "The adoption of TCP/IP protocol suite marked the birth of the modern internet."),
    entry(1984, "Bhopal Gas Tragedy",
          "The world's worst industrial disaster raised questions about corporate responsibility."),
    entry(1985, "Live Aid Concert",
          "A global music event that raised awareness and funds for Ethiopian famine relief."),
    entry(1986, "Chernobyl Disaster",
          "The worst nuclear power plant accident in history, with global environmental impacts."),
    entry(1987, "Stock Market Crash",
          "Black Monday saw the largest one-day percentage decline in stock market history."),
    entry(1988, "First Major Internet Worm",
          "The Morris Worm exposed the vulnerability of the emerging digital infrastructure."),
    entry(1989, "Fall of the Berlin Wall",
          "A pivotal moment symbolizing the end of the Cold War and German reunification."),
    entry(1990, "World Wide Web Invented",
          "Tim Berners-Lee's creation would transform how humanity accesses information."),
    entry(1991, "Dissolution of the Soviet Union",
          "The end of the Cold War and complete reshaping of global geopolitics."),
    entry(1992, "First Text Message Sent",
          "The humble SMS would transform how people communicate globally."),
    entry(1993, "European Union Established",
          "The Maastricht Treaty created a political and economic union that reshaped Europe."),
    entry(1994, "Rwandan Genocide",
          "Approximately 800,000 people were killed in one of history's worst genocides."),
    entry(1995, "Oklahoma City Bombing",
          "The deadliest domestic terrorist attack in U.S. history prior to 9/11."),
    entry(1996, "Dolly the Sheep Cloned",
          "The first mammal cloned from an adult cell, raising ethical questions about biotechnology."),
    entry(1997, "Princess Diana's Death",
          "A global outpouring of grief and media coverage unprecedented in scale."),
    entry(1998, "Google Founded",
          "The start of a company that would revolutionize how we find information online."),
    entry(1999, "Y2K Preparations",
          "Global concern over potential computer failures led to massive technology upgrades."),
    entry(2000, "Y2K Transition",
          "The millennium bug fears subsided as the world entered a new century with minimal disruption."),
    entry(2001, "9/11 Terrorist Attacks",
          "The deadliest terrorist attack in history transformed global security and international relations."),
    entry(2002, "Euro Currency Introduced",
          "A major milestone in European integration with global economic impact."),
    entry(2003, "Human Genome Project Completed",
          "The mapping of human DNA opened new frontiers in medicine and biotechnology."),
    entry(2004, "Indian Ocean Tsunami",
          "One of the deadliest natural disasters in recorded history, affecting multiple countries."),
    entry(2005, "Hurricane Katrina",
          "Devastating storm that exposed social inequalities and failures in disaster response."),
    entry(2006, "Twitter Launched",
          "The beginning of a social media platform that would transform public discourse."),
    entry(2007, "iPhone Released",
          "Apple's revolutionary device launched the smartphone era and changed daily life."),
    entry(2008, "Global Financial Crisis",
          "The worst economic disaster since the Great Depression affected millions worldwide."),
    entry(2009, "First Bitcoin Transaction",
          "The start of cryptocurrency that would challenge traditional financial systems."),
    entry(2010, "Arab Spring Begins",
          "Wave of pro-democracy protests across the Middle East transformed regional politics."),
    entry(2011, "Fukushima Nuclear Disaster",
          "Earthquake and tsunami caused the worst nuclear accident since Chernobyl."),
    entry(2012, "Higgs Boson Discovery",
          "CERN scientists confirmed the existence of the 'God particle,' validating the Standard Model of physics."),
    entry(2013, "Boston Marathon Bombing",
          "Terrorist attack that demonstrated the resilience of a city and nation."),
    entry(2014, "Ebola Epidemic",
          "The largest Ebola outbreak in history tested global health systems."),
    entry(2015, "Paris Climate Agreement",
          "Landmark international accord to combat climate change and its impacts."),
    entry(2016, "Brexit Referendum Shocks Europe",
          "The United Kingdom voted to leave the European Union, marking the first time a member state chose to exit. This historic decision reshaped European politics and triggered years of complex negotiations about the future of UK-EU relations."),
    entry(2016, "Brexit Referendum",
          "UK voted to leave the European Union, beginning a complex separation process."),
    entry(2017, "#MeToo Movement Goes Global",
          "What began as a hashtag became a global movement against sexual harassment and assault, leading to the downfall of powerful figures in entertainment, politics, and business, and fundamentally changing workplace culture worldwide."),
    entry(2017, "#MeToo Movement",
          "Global movement against sexual harassment and assault transformed workplace culture."),
    entry(2018, "Gene-Edited Babies Spark Ethical Debate",
          "A Chinese scientist announced the birth of the world's first gene-edited babies, triggering intense debate about the ethics of human genetic modification and leading to new global regulations on genetic research."),
    entry(2018, "First Gene-Edited Babies",
          "Chinese scientist's controversial experiment raised profound ethical questions."),
    entry(2019, "First Image of a Black Hole",
          "Scientists captured the first-ever image of a black hole, located 55 million light-years away in the M87 galaxy. This groundbreaking achievement confirmed Einstein's theories and gave humanity its first look at one of the universe's most mysterious phenomena."),
    entry(2019, "First Image of a Black Hole",
          "Breakthrough in astronomy confirmed Einstein's theories and expanded our cosmic understanding."),
    entry(2020, "COVID-19 Pandemic Reshapes the World",
          "A novel coronavirus spread globally, leading to lockdowns affecting billions of people. The pandemic transformed how we work, learn, and socialize, accelerating digital transformation and exposing societal inequalities. Over 6 million lives were lost worldwide."),
    entry(2020, "COVID-19 Pandemic",
          "Global pandemic that caused millions of deaths and transformed society in countless ways."),
    entry(2021, "Global Vaccination Campaign",
          "The world witnessed the largest vaccination campaign in history, with billions of COVID-19 shots administered globally. This scientific achievement marked a turning point in the pandemic, though vaccine inequality between rich and poor nations remained a critical issue."),
    entry(2021, "Vaccines Developed in Record Time",
          "Scientific achievement that demonstrated humanity's resilience and innovation."),
    entry(2022, "Russia Invades Ukraine",
          "Russia launched a full-scale invasion of Ukraine, leading to the largest military conflict in Europe since World War II. The war caused a global energy crisis, massive refugee movements, and united Western nations in support of Ukraine through unprecedented sanctions against Russia."),
    entry(2022, "Russia-Ukraine War",
          "Europe's largest military conflict since World War II reshaped global security."),
    entry(2023, "AI Revolution Transforms Society",
          "ChatGPT and other AI models became household names, sparking global discussions about AI's impact on jobs, creativity, and the future of human work. Companies worldwide began integrating AI into their operations, while governments rushed to regulate this powerful technology."),
    entry(2023, "AI Revolution Accelerates",
          "Rapid advancements in artificial intelligence began transforming work, creativity, and society."),
    entry(2024, "First Human Mars Sample Return",
          "NASA and ESA's joint mission successfully brings back the first samples from Mars, providing unprecedented insights into the Red Planet's history and potential for past life."),
    entry(2025, "Quantum Computing Breakthrough",
          "The first practical quantum computer surpasses classical computers in solving real-world problems, revolutionizing fields from drug discovery to climate modeling."),
    entry(2026, "Global Clean Energy Milestone",
          "Renewable energy sources surpass fossil fuels in global electricity production for the first time, marking a turning point in the fight against climate change."),
    entry(2027, "Brain-Computer Interface Goes Mainstream",
          "The first commercial neural implant receives widespread adoption, allowing direct mental control of digital devices and helping paralyzed individuals regain mobility."),
    entry(2028, "First Lunar Colony Established",
          "International cooperation leads to the first permanent human settlement on the Moon, marking the beginning of sustained human presence beyond Earth."),
    entry(2029, "AI Achieves Human-Level Intelligence",
          "Artificial General Intelligence (AGI) demonstrates human-level reasoning across all domains, triggering profound debates about consciousness and human identity."),
    entry(2030, "Global Universal Basic Income Pilot",
          "A coalition of nations launches the first large-scale UBI program in response to widespread automation of jobs, reshaping economic systems."),
    entry(2035, "First Human Mission to Mars",
          "International astronauts successfully land on Mars, establishing the first temporary research base and marking humanity's first steps on another planet."),
    entry(2038, "Ocean Cleanup Completion",
          "Automated systems finally remove the last major ocean plastic garbage patch, demonstrating humanity's ability to reverse environmental damage."),
    entry(2040, "Global Temperature Stabilization",
          "Thanks to aggressive climate action and carbon capture technology, global temperatures begin to stabilize for the first time since the industrial revolution."),
    entry(2045, "Human-AI Merger Begins",
          "Safe neural implants allowing direct AI integration with human consciousness become available, leading to the first 'augmented humans'."),
    entry(2050, "Aging Reversed in Humans",
          "The first successful clinical trials demonstrate significant reversal of biological aging, promising dramatic extensions to human lifespan."),
    entry(2055, "Permanent Mars Colony",
          "The first self-sustaining city on Mars reaches 10,000 inhabitants, marking the first true human civilization on another planet."),
    entry(2060, "First Interstellar Probe Launch",
          "Humanity launches its first dedicated mission to explore nearby star systems, using breakthrough propulsion technology."),
    entry(2065, "Global Neural Network",
          "A secure, global brain-to-brain communication network goes online, enabling instant thought sharing and collective problem-solving."),
    entry(2070, "Artificial Ecosystem Creation",
          "Scientists successfully create the first completely artificial, self-sustaining ecosystem, providing a template for terraforming other planets."),
    entry(2075, "Consciousness Transfer Achievement",
          "The first successful transfer of human consciousness to a synthetic substrate is achieved, opening debates about the nature of human identity."),
    entry(2080, "Solar System Mining Network",
          "A comprehensive automated mining operation across the asteroid belt makes rare materials abundant, ending resource scarcity on Earth."),
    entry(2085, "First Contact Protocol Activated",
          "Clear evidence of extraterrestrial intelligence is detected, leading to the implementation of humanity's first coordinated response plan."),
    entry(2090, "Time Manipulation Discovery",
          "Scientists achieve the first controlled manipulation of time at the quantum level, opening new possibilities for physics and technology."),
    entry(2095, "Multi-Planet Democracy Established",
          "The first unified government system spanning Earth, Mars, and space colonies is formed, representing humanity's evolution into a multi-planet species."),
    entry(2100, "Dimensional Gateway Created",
          "The first stable artificial wormhole is created in a laboratory, promising revolutionary new possibilities for space travel and physics."),
    entry(2105, "Universal Translator Perfected",
          "AI-powered technology enables perfect real-time translation between all human and animal communication, transforming our understanding of consciousness."),
    entry(2110, "Humanity Reaches Type I Civilization",
          "Humanity finally achieves the status of a Type I Kardashev civilization, able to harness and store all the energy available on Earth."),
];
